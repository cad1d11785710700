use crate::core::models::AnalyzeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn from_health(reachable: bool) -> Self {
        if reachable {
            BackendStatus::Online
        } else {
            BackendStatus::Offline
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    Analysis { request_id: u64, outcome: AnalyzeOutcome },
    BackendHealth(BackendStatus),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Analysis { .. } => "analysis",
            TaskResult::BackendHealth(_) => "backend_health",
        }
    }
}

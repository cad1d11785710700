use tracing::{
    debug,
    warn,
};

use crate::core::{
    AnalyzeOutcome,
    WordItem,
};

/// What the window shows. Exactly one variant is current.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisView {
    #[default]
    Idle,
    Loading {
        request_id: u64,
        url: String,
    },
    Success {
        words: Vec<WordItem>,
    },
    Failure {
        message: String,
    },
}

/// View-model for the analysis round trip.
#[derive(Debug, Default)]
pub struct AnalysisState {
    view: AnalysisView,
    last_request_id: u64,
}

impl AnalysisState {
    pub fn view(&self) -> &AnalysisView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, AnalysisView::Loading { .. })
    }

    pub fn can_submit(&self, url: &str) -> bool {
        !self.is_loading() && !url.trim().is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.view {
            AnalysisView::Failure { message } => Some(message),
            _ => None,
        }
    }

    pub fn words(&self) -> Option<&[WordItem]> {
        match &self.view {
            AnalysisView::Success { words } => Some(words),
            _ => None,
        }
    }

    /// Enters `Loading`, dropping any previous result or error, and returns the
    /// id the outcome must carry. `None` while a request is in flight or when
    /// the URL is blank.
    pub fn submit(&mut self, url: &str) -> Option<u64> {
        if !self.can_submit(url) {
            debug!(url, loading = self.is_loading(), "submission ignored");
            return None;
        }

        self.last_request_id += 1;
        self.view = AnalysisView::Loading { request_id: self.last_request_id, url: url.trim().to_string() };
        Some(self.last_request_id)
    }

    /// Applies an outcome. Outcomes for anything but the current request are
    /// dropped and `false` is returned.
    pub fn complete(&mut self, request_id: u64, outcome: AnalyzeOutcome) -> bool {
        match &self.view {
            AnalysisView::Loading { request_id: current, .. } if *current == request_id => {}
            _ => {
                warn!(request_id, current = self.last_request_id, "dropping stale analysis result");
                return false;
            }
        }

        self.view = match outcome {
            AnalyzeOutcome::Success { words } => AnalysisView::Success { words },
            AnalyzeOutcome::Failure { message } => AnalysisView::Failure { message },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flow() {
        let mut state = AnalysisState::default();
        assert_eq!(state.view(), &AnalysisView::Idle);

        let id = state.submit("https://www.bbc.com/news").unwrap();
        assert!(state.is_loading());
        assert!(!state.can_submit("https://www.cnn.com/"));

        let words = vec![WordItem::new("economy", 0.9)];
        assert!(state.complete(id, AnalyzeOutcome::Success { words: words.clone() }));
        assert!(!state.is_loading());
        assert_eq!(state.words(), Some(words.as_slice()));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_replaces_result() {
        let mut state = AnalysisState::default();
        let first = state.submit("https://www.bbc.com/news").unwrap();
        state.complete(first, AnalyzeOutcome::Success { words: vec![WordItem::new("a", 0.5)] });

        let second = state.submit("https://www.bbc.com/news").unwrap();
        assert!(second > first);
        assert_eq!(state.words(), None);

        state.complete(second, AnalyzeOutcome::failure("invalid url"));
        assert_eq!(state.error(), Some("invalid url"));
        assert_eq!(state.words(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_blank_url_and_duplicates_rejected() {
        let mut state = AnalysisState::default();
        assert_eq!(state.submit("   "), None);
        assert_eq!(state.view(), &AnalysisView::Idle);

        let id = state.submit(" https://www.cnn.com/ ").unwrap();
        assert_eq!(
            state.view(),
            &AnalysisView::Loading { request_id: id, url: "https://www.cnn.com/".to_string() }
        );
        assert_eq!(state.submit("https://www.cnn.com/"), None);
    }

    #[test]
    fn test_stale_outcomes_ignored() {
        let mut state = AnalysisState::default();
        let id = state.submit("https://www.nytimes.com/").unwrap();

        assert!(!state.complete(id + 1, AnalyzeOutcome::failure("late")));
        assert!(state.is_loading());

        assert!(state.complete(id, AnalyzeOutcome::Success { words: Vec::new() }));
        // A repeated delivery for a finished request changes nothing
        assert!(!state.complete(id, AnalyzeOutcome::failure("again")));
        assert_eq!(state.words(), Some(&[][..]));
    }
}

use std::{
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::{
    debug,
    warn,
};

use super::{
    BackendStatus,
    TaskResult,
};
use crate::core::{
    client::AnalysisClient,
    models::{
        AnalyzeOutcome,
        UNKNOWN_ERROR,
    },
    CloudError,
};

/// Called after a result is queued so the UI polls without waiting for input.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    client: AnalysisClient,
    waker: Waker,
    health_in_flight: Arc<AtomicBool>,
}

impl TaskManager {
    pub fn new(client: AnalysisClient, waker: Waker) -> Result<Self, CloudError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime,
            receiver,
            sender,
            client,
            waker,
            health_in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, AnalysisClient, Waker) {
        (self.sender.clone(), self.runtime.clone(), self.client.clone(), self.waker.clone())
    }

    /// Runs one analysis in the background. Exactly one `TaskResult::Analysis`
    /// with this `request_id` is delivered, even if the worker panics.
    pub fn analyze(&self, request_id: u64, url: String) {
        let (sender, runtime, client, waker) = self.task_context();

        thread::spawn(move || {
            let mut guard = CompletionGuard::new(sender, waker, request_id);
            let outcome = runtime.block_on(async { client.analyze(&url).await });
            guard.complete(outcome);
        });
    }

    /// Starts a health check unless one is still running. Returns whether a
    /// check was started.
    pub fn check_backend(&self) -> bool {
        if self.health_in_flight.swap(true, Ordering::AcqRel) {
            debug!("health check still running, skipping");
            return false;
        }

        let (sender, runtime, client, waker) = self.task_context();
        let in_flight = InFlight(self.health_in_flight.clone());

        thread::spawn(move || {
            let reachable = runtime.block_on(async { client.health().await });
            drop(in_flight);

            let _ = sender.send(TaskResult::BackendHealth(BackendStatus::from_health(reachable)));
            waker();
        });

        true
    }

    pub fn health_check_running(&self) -> bool {
        self.health_in_flight.load(Ordering::Acquire)
    }
}

/// Clears the health check flag when the worker finishes, panics included.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Reports the outcome of one analysis. If dropped before `complete`, it
/// reports a failure instead so the UI never stays in the loading state.
struct CompletionGuard {
    sender: mpsc::Sender<TaskResult>,
    waker: Waker,
    request_id: u64,
    done: bool,
}

impl CompletionGuard {
    fn new(sender: mpsc::Sender<TaskResult>, waker: Waker, request_id: u64) -> Self {
        Self { sender, waker, request_id, done: false }
    }

    fn complete(&mut self, outcome: AnalyzeOutcome) {
        if self.done {
            return;
        }
        self.done = true;

        if self.sender.send(TaskResult::Analysis { request_id: self.request_id, outcome }).is_err() {
            warn!(request_id = self.request_id, "result receiver dropped before completion");
        }
        (self.waker)();
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if !self.done {
            warn!(request_id = self.request_id, "analysis worker ended without a result");
            self.complete(AnalyzeOutcome::failure(UNKNOWN_ERROR));
        }
    }
}

use std::future::Future;

use tokio::task::JoinHandle;

/// Single-slot task supervisor: only the latest request runs to completion.
///
/// Must be used from within a Tokio runtime.
pub struct LatestTask {
    name: &'static str,
    current: Option<JoinHandle<()>>,
}

impl LatestTask {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: None,
        }
    }

    /// Spawn `task`, aborting the previous one if it has not finished.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(previous) = self.current.take() {
            if !previous.is_finished() {
                previous.abort();
                tracing::debug!(effect = self.name, "Superseded in-flight request");
            }
        }
        self.current = Some(tokio::spawn(task));
    }

    /// Whether a spawned task is still pending.
    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for LatestTask {
    fn drop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }
}

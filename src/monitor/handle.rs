use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

/// Owned handle to a started monitor's background task
///
/// Returned by `ActivityMonitor::start` so lifecycle is explicit and
/// test-isolable instead of living in process-global state. Dropping the
/// handle does not stop the task; call `stop` first.
pub struct MonitorHandle {
    running: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub(crate) fn new(running: Arc<AtomicBool>, task: JoinHandle<()>) -> Self {
        Self { running, task }
    }

    /// Prevent future sweep ticks
    ///
    /// Idempotent. An in-flight sweep is not cancelled; it runs to
    /// completion and the task exits at its next tick.
    pub fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            tracing::debug!("activity monitor already stopped");
            return;
        }
        tracing::info!("activity monitor stop requested");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Wait for the background task to observe the stop and exit
    pub async fn stopped(self) {
        let _ = self.task.await;
    }
}

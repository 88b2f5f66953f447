//! Trailing-edge debounce on the tokio timer.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default delay for search-as-you-type input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs only the last of a burst of calls, `wait` after that call.
///
/// Each [`Debouncer::call`] cancels the previously scheduled one. Must be
/// used from within a tokio runtime.
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `f`, replacing whatever was scheduled before.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait;
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        }));
    }

    /// Drops the scheduled call, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Tokio runtime scheduler implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{ScheduledFn, ScheduledHandle, Scheduler};

/// Tokio-based scheduler that sleeps on a tokio runtime before running callbacks.
#[derive(Clone)]
pub struct TokioScheduler {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioScheduler {
    /// Create a `TokioScheduler` from a tokio runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Create a `TokioScheduler` bound to the runtime of the calling task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledFn) -> ScheduledHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        // Deadline is fixed now, not when the spawned task is first polled.
        let deadline = tokio::time::Instant::now() + delay;
        let join = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if !flag.load(Ordering::SeqCst) {
                task();
            }
        });
        ScheduledHandle::new(cancelled).with_abort(move || join.abort())
    }
}

//! Cancellable delayed-task abstraction.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Boxed callback run once when a scheduled delay elapses.
pub type ScheduledFn = Box<dyn FnOnce() + Send + 'static>;

/// Abstraction for running a callback after a delay on some runtime or clock.
pub trait Scheduler: Send + Sync {
    /// Schedule `task` to run once after `delay`.
    fn schedule(&self, delay: Duration, task: ScheduledFn) -> ScheduledHandle;
}

/// Handle to a scheduled callback.
///
/// Dropping the handle does not cancel the callback; call [`ScheduledHandle::cancel`].
pub struct ScheduledHandle {
    cancelled: Arc<AtomicBool>,
    abort: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl ScheduledHandle {
    /// Create a handle sharing the given cancellation flag.
    pub fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self {
            cancelled,
            abort: None,
        }
    }

    /// Attach a runtime-specific abort action run on cancel.
    #[must_use]
    pub fn with_abort(mut self, abort: impl FnOnce() + Send + 'static) -> Self {
        self.abort = Some(Box::new(abort));
        self
    }

    /// Cancel the callback. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }

    /// Whether the callback was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for ScheduledHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledHandle")
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}

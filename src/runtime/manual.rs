//! Virtual-clock scheduler driven by explicit [`ManualScheduler::advance`] calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::{ScheduledFn, ScheduledHandle, Scheduler};

struct PendingTask {
    id: u64,
    due: Duration,
    cancelled: Arc<AtomicBool>,
    task: ScheduledFn,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    tasks: Vec<PendingTask>,
}

/// Deterministic scheduler for tests and hosts without an async runtime.
///
/// Callbacks only run inside [`advance`](Self::advance), on the caller's thread,
/// ordered by due time then by scheduling order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ClockState>>,
}

impl ManualScheduler {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of scheduled callbacks not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.state
            .lock()
            .tasks
            .iter()
            .filter(|t| !t.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Move the clock forward, running every callback that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(next) = self.pop_due(target) {
            if !next.cancelled.load(Ordering::SeqCst) {
                (next.task)();
            }
        }
        let mut state = self.state.lock();
        if state.now < target {
            state.now = target;
        }
    }

    fn pop_due(&self, target: Duration) -> Option<PendingTask> {
        let mut state = self.state.lock();
        let index = state
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;
        let task = state.tasks.swap_remove(index);
        if task.due > state.now {
            state.now = task.due;
        }
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledFn) -> ScheduledHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.tasks.push(PendingTask {
            id,
            due,
            cancelled: Arc::clone(&cancelled),
            task,
        });
        ScheduledHandle::new(cancelled)
    }
}

//! Last-write-wins debouncing on top of a [`Scheduler`].
//!
//! Each [`Debouncer::reschedule`] cancels the pending callback and starts a new
//! quiet period. Only the value present when a quiet period completes is
//! committed; intermediate values are discarded. A generation counter guards
//! against a callback that was already running when it got cancelled.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::{ScheduledHandle, Scheduler};

/// Callback invoked after a commit.
///
/// Hooks may run late relative to other commits, so they should read the value
/// through [`Settled::get`] under whatever lock orders their own publishing.
pub type SettleHook<T> = Arc<dyn Fn(&Settled<T>) + Send + Sync + 'static>;

struct DebounceState<T> {
    settled: T,
    pending: Option<T>,
    generation: u64,
    handle: Option<ScheduledHandle>,
}

/// Read handle to a debouncer's latest committed value.
pub struct Settled<T>(Arc<Mutex<DebounceState<T>>>);

impl<T: Clone> Settled<T> {
    /// Latest committed value, which may be newer than the commit that ran the hook.
    pub fn get(&self) -> T {
        self.0.lock().settled.clone()
    }
}

/// Lagged mirror of a changing value.
pub struct Debouncer<T> {
    delay: Duration,
    scheduler: Arc<dyn Scheduler>,
    state: Arc<Mutex<DebounceState<T>>>,
    on_settle: Option<SettleHook<T>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + 'static,
{
    /// Create a debouncer whose settled value starts at `initial`.
    pub fn new(initial: T, delay: Duration, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            delay,
            scheduler,
            state: Arc::new(Mutex::new(DebounceState {
                settled: initial,
                pending: None,
                generation: 0,
                handle: None,
            })),
            on_settle: None,
        }
    }

    /// Register a hook run after each commit. The hook runs on the scheduler's thread.
    #[must_use]
    pub fn on_settle(mut self, hook: impl Fn(&Settled<T>) + Send + Sync + 'static) -> Self {
        self.on_settle = Some(Arc::new(hook));
        self
    }

    /// Quiet period length.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Latest committed value.
    pub fn value(&self) -> T {
        self.state.lock().settled.clone()
    }

    /// True while a value is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Replace the pending value and restart the quiet period.
    pub fn reschedule(&self, value: T) {
        let generation = {
            let mut state = self.state.lock();
            if let Some(mut handle) = state.handle.take() {
                handle.cancel();
            }
            state.generation = state.generation.wrapping_add(1);
            state.pending = Some(value);
            state.generation
        };

        let shared = Arc::clone(&self.state);
        let hook = self.on_settle.clone();
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || commit(&shared, generation, hook.as_ref())),
        );

        let mut state = self.state.lock();
        if state.generation == generation && state.pending.is_some() {
            state.handle = Some(handle);
        }
    }

    /// Commit the pending value now, skipping the rest of the quiet period.
    pub fn flush(&self) {
        let generation = {
            let mut state = self.state.lock();
            if let Some(mut handle) = state.handle.take() {
                handle.cancel();
            }
            state.generation
        };
        commit(&self.state, generation, self.on_settle.as_ref());
    }

    /// Drop the pending value; the settled value is left as is.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        state.pending = None;
        if let Some(mut handle) = state.handle.take() {
            handle.cancel();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        if let Some(mut handle) = state.handle.take() {
            handle.cancel();
        }
    }
}

fn commit<T: Clone>(
    state: &Arc<Mutex<DebounceState<T>>>,
    generation: u64,
    hook: Option<&SettleHook<T>>,
) {
    {
        let mut guard = state.lock();
        if guard.generation != generation {
            return;
        }
        let Some(value) = guard.pending.take() else {
            return;
        };
        guard.handle = None;
        guard.settled = value;
    }
    if let Some(hook) = hook {
        hook(&Settled(Arc::clone(state)));
    }
}

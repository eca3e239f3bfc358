//! Scheduler implementations and host-facing API models.

pub mod api;
pub mod manual;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_scheduler;

pub use api::{snapshot, TableSnapshot};
pub use manual::ManualScheduler;
#[cfg(feature = "tokio-runtime")]
pub use tokio_scheduler::TokioScheduler;

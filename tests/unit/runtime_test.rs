//! Tests for scheduler adapters

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use server_table::core::Scheduler;
use server_table::runtime::{ManualScheduler, TokioScheduler};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_scheduler_runs_task() {
    let scheduler = TokioScheduler::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    let _handle = scheduler.schedule(
        Duration::from_millis(5),
        Box::new(move || {
            tx.send(123).unwrap();
        }),
    );

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_scheduler_cancel() {
    let scheduler = TokioScheduler::current();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let mut handle = scheduler.schedule(
        Duration::from_millis(50),
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    handle.cancel();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(handle.is_cancelled());
}

#[test]
fn test_manual_scheduler_zero_delay_runs_on_advance() {
    let clock = ManualScheduler::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let _handle = clock.schedule(
        Duration::ZERO,
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    clock.advance(Duration::ZERO);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Scheduler Tests — auto-refresh timer lifecycle
// ═══════════════════════════════════════════════════════════════════

#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;

use trade_tracker_core::{RefreshScheduler, SharedTradeTracker, TradeTracker};

fn shared_tracker() -> SharedTradeTracker {
    Arc::new(Mutex::new(TradeTracker::with_sample_positions()))
}

#[tokio::test(start_paused = true)]
async fn ticks_run_a_refresh_against_current_state() {
    let tracker = shared_tracker();
    let _scheduler = RefreshScheduler::start(&tracker, Duration::from_secs(30));

    assert!(tracker.lock().await.last_update().is_none());

    // past the first period — one tick must have fired
    sleep(Duration::from_secs(31)).await;
    assert!(tracker.lock().await.last_update().is_some());
}

#[tokio::test(start_paused = true)]
async fn first_refresh_waits_a_full_period() {
    let tracker = shared_tracker();
    let _scheduler = RefreshScheduler::start(&tracker, Duration::from_secs(30));

    sleep(Duration::from_secs(15)).await;
    assert!(tracker.lock().await.last_update().is_none());
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_and_never_rearms() {
    let tracker = shared_tracker();
    let mut scheduler = RefreshScheduler::start(&tracker, Duration::from_secs(30));

    sleep(Duration::from_secs(31)).await;
    let after_first_tick = tracker.lock().await.last_update();
    assert!(after_first_tick.is_some());

    scheduler.stop();

    // several periods later, nothing else has fired
    sleep(Duration::from_secs(120)).await;
    assert!(!scheduler.is_running());
    assert_eq!(tracker.lock().await.last_update(), after_first_tick);
}

#[tokio::test(start_paused = true)]
async fn stop_is_idempotent() {
    let tracker = shared_tracker();
    let mut scheduler = RefreshScheduler::start(&tracker, Duration::from_secs(30));
    scheduler.stop();
    scheduler.stop();
    tokio::task::yield_now().await;
    assert!(!scheduler.is_running());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_scheduler_tears_the_task_down() {
    let tracker = shared_tracker();
    let scheduler = RefreshScheduler::start(&tracker, Duration::from_secs(30));
    drop(scheduler);

    sleep(Duration::from_secs(120)).await;
    assert!(tracker.lock().await.last_update().is_none());
}

#[tokio::test(start_paused = true)]
async fn task_exits_when_the_tracker_is_gone() {
    let tracker = shared_tracker();
    let scheduler = RefreshScheduler::start(&tracker, Duration::from_secs(30));

    drop(tracker);
    // the next tick fails to upgrade the weak handle and the task ends
    sleep(Duration::from_secs(31)).await;
    assert!(!scheduler.is_running());
}

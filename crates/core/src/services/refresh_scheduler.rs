use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use crate::TradeTracker;

/// Shared handle to a tracker driven by both a frontend and the
/// auto-refresh timer.
pub type SharedTradeTracker = Arc<Mutex<TradeTracker>>;

/// Cancellable auto-refresh timer.
///
/// Owns a background task that runs one full price refresh per period.
/// The task holds only a weak handle to the shared tracker: each tick
/// locks the state current at trigger time (never a stale snapshot), and
/// the task exits on its own once the tracker is dropped. `stop()` aborts
/// the task; a stopped scheduler never re-arms. Dropping the scheduler
/// also tears the task down, so no recurring trigger can outlive it.
pub struct RefreshScheduler {
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    /// Start refreshing `tracker` every `period`.
    ///
    /// The first refresh fires one full period after the call, matching a
    /// plain interval timer; callers wanting an immediate refresh invoke
    /// `refresh_prices()` themselves.
    pub fn start(tracker: &SharedTradeTracker, period: Duration) -> Self {
        let weak: Weak<Mutex<TradeTracker>> = Arc::downgrade(tracker);
        info!(period_secs = period.as_secs(), "auto-refresh enabled");

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // A tokio interval yields immediately on its first tick.
            interval.tick().await;

            loop {
                interval.tick().await;
                let Some(tracker) = weak.upgrade() else {
                    break;
                };
                tracker.lock().await.refresh_prices().await;
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// True while the background task is alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer. Idempotent; the task never fires again.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("auto-refresh disabled");
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

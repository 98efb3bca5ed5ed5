use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::errors::DashboardError;

/// How often the holdings snapshot is re-fetched (2 minutes).
pub const HOLDINGS_REFRESH_INTERVAL: Duration = Duration::from_secs(120);

/// How often the performance history is re-fetched (5 minutes).
pub const HISTORY_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Handle to a running periodic refresh task.
///
/// Dropping the handle does NOT stop the task; call [`abort`](Self::abort).
/// Each poller is an independent tokio task, so aborting or breaking one
/// never affects another — the holdings and history cycles stay isolated.
#[derive(Debug)]
pub struct PollerHandle {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the poller.
    pub fn abort(&self) {
        log::debug!("stopping {} poller", self.name);
        self.handle.abort();
    }

    /// Whether the underlying task has finished (aborted or panicked).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// The underlying task handle, for callers that want to await shutdown.
    #[must_use]
    pub fn join_handle(&self) -> &JoinHandle<()> {
        &self.handle
    }
}

/// Spawn a periodic refresh task that runs `tick` every `interval`.
///
/// The first tick fires immediately. A failed tick is logged at warn level
/// and the loop keeps going — one bad response must not kill the cycle.
/// Ticks never overlap: a slow tick delays the next one rather than
/// stacking up behind it.
pub fn spawn_poller<F, Fut>(
    name: &'static str,
    interval: Duration,
    mut tick: F,
) -> PollerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), DashboardError>> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            timer.tick().await;
            match tick().await {
                Ok(()) => log::debug!("{name} refresh completed"),
                Err(e) => log::warn!("{name} refresh failed: {e}"),
            }
        }
    });

    PollerHandle { name, handle }
}

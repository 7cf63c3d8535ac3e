//! Background fleet polling.
//!
//! An explicitly constructed poller with a start/stop lifecycle: `start`
//! spawns a tokio task that refreshes a fleet snapshot on an interval and
//! publishes it into a `watch` channel; `stop` cancels the task. There is
//! no global instance: whoever needs polling constructs one, holds the
//! handle, and decides when it dies.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::cache::CachedTrackerClient;
use super::types::VehiclePosition;

/// Default snapshot refresh period, matching the original 30 s map poll.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(30);

/// A running fleet poller.
///
/// Dropping the poller leaves the task running until its next send fails;
/// call [`stop`](VehiclePoller::stop) for deterministic shutdown.
pub struct VehiclePoller {
    task: JoinHandle<()>,
    latest: watch::Receiver<Vec<VehiclePosition>>,
}

impl VehiclePoller {
    /// Start polling. The first snapshot is fetched immediately, then
    /// every `period`.
    pub fn start(client: Arc<CachedTrackerClient>, period: Duration) -> Self {
        let (tx, latest) = watch::channel(Vec::new());

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let snapshot = client.all_positions().await;
                tracing::debug!(vehicles = snapshot.len(), "fleet snapshot refreshed");
                if tx.send(snapshot).is_err() {
                    // Every receiver is gone; nobody is watching
                    break;
                }
            }
        });

        Self { task, latest }
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<VehiclePosition>> {
        self.latest.clone()
    }

    /// The most recently published snapshot (empty until the first poll
    /// completes).
    pub fn latest(&self) -> Vec<VehiclePosition> {
        self.latest.borrow().clone()
    }

    /// Whether the polling task is still alive.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel the polling task.
    pub fn stop(self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gps::cache::{CachedTrackerClient, TrackerCacheConfig};
    use crate::gps::client::{TrackerClient, TrackerConfig};

    fn offline_client() -> Arc<CachedTrackerClient> {
        let config = TrackerConfig::new("key")
            .with_base_url("http://127.0.0.1:9")
            .with_devices(["20007"])
            .with_timeout(1);
        Arc::new(CachedTrackerClient::new(
            TrackerClient::new(config).unwrap(),
            &TrackerCacheConfig::default(),
        ))
    }

    #[tokio::test]
    async fn publishes_an_initial_snapshot() {
        let poller = VehiclePoller::start(offline_client(), Duration::from_millis(10));
        let mut rx = poller.subscribe();

        // The immediate first poll fails against the dead endpoint and
        // publishes an empty snapshot
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_empty());
        assert!(poller.latest().is_empty());
        assert!(poller.is_running());

        poller.stop();
    }

    #[tokio::test]
    async fn stop_cancels_the_task() {
        let poller = VehiclePoller::start(offline_client(), Duration::from_millis(10));
        let task_probe = poller.subscribe();

        poller.stop();

        // After abort the sender is eventually dropped and receivers see
        // the channel close
        let mut rx = task_probe;
        loop {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

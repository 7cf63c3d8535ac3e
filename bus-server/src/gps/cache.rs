//! Caching layer for tracker responses.
//!
//! Every browser on the live map polls the server, and the tracker bills
//! by request. A short per-device TTL collapses those bursts into at most
//! one upstream fetch per device per TTL window.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::client::TrackerClient;
use super::error::TrackerError;
use super::types::VehiclePosition;

/// Configuration for the tracker cache.
#[derive(Debug, Clone)]
pub struct TrackerCacheConfig {
    /// TTL for cached device statuses.
    pub ttl: Duration,

    /// Maximum number of cached devices.
    pub max_capacity: u64,
}

impl Default for TrackerCacheConfig {
    fn default() -> Self {
        Self {
            // Comfortably under the 30 s browser polling period
            ttl: Duration::from_secs(20),
            max_capacity: 64,
        }
    }
}

/// Tracker client with per-device response caching.
pub struct CachedTrackerClient {
    client: TrackerClient,
    cache: MokaCache<String, Option<VehiclePosition>>,
}

impl CachedTrackerClient {
    /// Create a new cached client.
    pub fn new(client: TrackerClient, config: &TrackerCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Fetch one device's status, serving from cache when fresh.
    ///
    /// Only successful responses are cached; errors always retry upstream.
    pub async fn device_status(
        &self,
        device_id: &str,
    ) -> Result<Option<VehiclePosition>, TrackerError> {
        if let Some(cached) = self.cache.get(device_id).await {
            return Ok(cached);
        }

        let fresh = self.client.device_status(device_id).await?;
        self.cache
            .insert(device_id.to_string(), fresh.clone())
            .await;

        Ok(fresh)
    }

    /// Fetch a fleet snapshot through the cache.
    ///
    /// Same degradation contract as [`TrackerClient::all_positions`]:
    /// failing devices are logged and skipped.
    pub async fn all_positions(&self) -> Vec<VehiclePosition> {
        let fetches = self
            .client
            .device_ids()
            .iter()
            .map(|id| async move { (id.as_str(), self.device_status(id).await) });

        futures::future::join_all(fetches)
            .await
            .into_iter()
            .filter_map(|(device, result)| match result {
                Ok(position) => position,
                Err(error) => {
                    tracing::warn!(device, %error, "vehicle status fetch failed");
                    None
                }
            })
            .collect()
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &TrackerClient {
        &self.client
    }

    /// Number of cached devices (for monitoring).
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop every cached entry.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

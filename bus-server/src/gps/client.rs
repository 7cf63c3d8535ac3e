//! Tracker HTTP client.
//!
//! Queries the third-party vehicle tracker for per-device status. The feed
//! authenticates through a `jsession` query parameter and answers one
//! device per request, so a fleet snapshot fans out one request per device.

use std::sync::Arc;

use tokio::sync::Semaphore;

use super::error::TrackerError;
use super::fleet::FleetRegistry;
use super::types::{StatusResponse, VehiclePosition};

/// Default base URL of the tracker feed.
const DEFAULT_BASE_URL: &str = "https://gps.monteverasrl.com.ar";

/// Device ids of the tracked fleet.
const DEFAULT_DEVICE_IDS: [&str; 7] = [
    "20007", "20006", "20011", "20009", "20010", "20013", "20008",
];

/// Default maximum concurrent feed requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the tracker client.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Session key passed as the `jsession` query parameter
    pub session_key: String,
    /// Base URL of the feed (defaults to the production tracker)
    pub base_url: String,
    /// Devices to query for a fleet snapshot
    pub device_ids: Vec<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TrackerConfig {
    /// Create a new config with the given session key.
    pub fn new(session_key: impl Into<String>) -> Self {
        Self {
            session_key: session_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            device_ids: DEFAULT_DEVICE_IDS.iter().map(|s| s.to_string()).collect(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the queried device list.
    pub fn with_devices<I, S>(mut self, devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_ids = devices.into_iter().map(Into::into).collect();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Tracker feed client.
///
/// A plain, explicitly constructed client: hand it to whoever needs it.
/// A semaphore bounds concurrent upstream requests.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: String,
    session_key: String,
    device_ids: Vec<String>,
    fleet: FleetRegistry,
    semaphore: Arc<Semaphore>,
}

impl TrackerClient {
    /// Create a new tracker client with the given configuration.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            session_key: config.session_key,
            device_ids: config.device_ids,
            fleet: FleetRegistry::current(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// The devices a fleet snapshot queries.
    pub fn device_ids(&self) -> &[String] {
        &self.device_ids
    }

    /// The fleet registry used to decode feed rows.
    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    /// Fetch the current status of one device.
    ///
    /// Returns `Ok(None)` when the feed has no row for the device (e.g.
    /// the tracker was never seen), and an error for transport failures,
    /// non-success HTTP statuses, or a non-zero feed result code.
    pub async fn device_status(
        &self,
        device_id: &str,
    ) -> Result<Option<VehiclePosition>, TrackerError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TrackerError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/StandardApiAction_getDeviceStatus.action", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("jsession", self.session_key.as_str()),
                ("devIdno", device_id),
                ("toMap", "1"),
                ("language", "zh"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TrackerError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrackerError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: StatusResponse =
            serde_json::from_str(&body).map_err(|e| TrackerError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if parsed.result != 0 {
            return Err(TrackerError::Feed {
                code: parsed.result,
            });
        }

        Ok(parsed
            .status
            .into_iter()
            .next()
            .map(|dto| self.fleet.decode(dto)))
    }

    /// Fetch a snapshot of the whole fleet.
    ///
    /// Queries every configured device concurrently. Devices that fail or
    /// have no position are skipped with a warning; a degraded feed yields
    /// a smaller snapshot, never an error.
    pub async fn all_positions(&self) -> Vec<VehiclePosition> {
        let fetches = self
            .device_ids
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
}

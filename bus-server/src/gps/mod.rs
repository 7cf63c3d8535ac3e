//! Vehicle tracker feed client.
//!
//! This module consumes the third-party GPS tracker the fleet reports to.
//! Key characteristics of the feed:
//! - authentication is a long-lived `jsession` query parameter
//! - one device per request; a fleet snapshot fans out and joins
//! - coordinates arrive in micro-degrees (decimal degrees × 1 000 000)
//! - the feed is read-only and best-effort: the schedule calculator never
//!   depends on it, only the live map does
//!
//! The feed is consumed, not owned; responses are decoded defensively and
//! a degraded feed produces a smaller snapshot rather than an error.

mod cache;
mod client;
mod error;
mod fleet;
mod poller;
mod types;

pub use cache::{CachedTrackerClient, TrackerCacheConfig};
pub use client::{TrackerClient, TrackerConfig};
pub use error::TrackerError;
pub use fleet::{DEPOT_MONTE_VERA, FleetRegistry, TERMINAL_SANTA_FE, infer_direction};
pub use poller::{DEFAULT_POLL_PERIOD, VehiclePoller};
pub use types::{DeviceStatusDto, STALE_PARK_SECS, StatusResponse, VehiclePosition};

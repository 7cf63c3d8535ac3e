//! Tracker feed DTOs and the converted vehicle position.
//!
//! The upstream tracker answers `getDeviceStatus` queries with terse,
//! abbreviated JSON. These types map that wire shape directly; conversion
//! to [`VehiclePosition`] decodes the micro-degree coordinates and attaches
//! fleet metadata.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, RouteId};

/// A vehicle parked longer than this is shown as stale on the map.
pub const STALE_PARK_SECS: i64 = 100;

/// Top-level response from `StandardApiAction_getDeviceStatus.action`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// Feed result code; zero means success.
    pub result: i32,

    /// Per-device status rows. Usually one row for a single-device query;
    /// omitted entirely when the device is unknown.
    #[serde(default)]
    pub status: Vec<DeviceStatusDto>,
}

/// One device row, abbreviated field names as sent by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceStatusDto {
    /// Device identifier.
    pub id: String,

    /// Longitude in micro-degrees (decimal degrees × 1 000 000).
    pub lng: f64,

    /// Latitude in micro-degrees.
    pub lat: f64,

    /// Map-adjusted longitude, as a string.
    pub mlng: Option<String>,

    /// Map-adjusted latitude, as a string.
    pub mlat: Option<String>,

    /// Position summary text.
    pub ps: Option<String>,

    /// Timestamp of the last GPS fix, feed-local format.
    pub gt: Option<String>,

    /// Speed in km/h; omitted when stationary.
    pub sp: Option<f64>,

    /// Online flag: 1 when the device is currently reporting.
    pub ol: Option<i32>,

    /// Heading in degrees, 0 = north.
    pub hx: Option<f64>,

    /// Seconds the vehicle has been parked.
    pub pk: Option<i64>,
}

/// A decoded, map-ready vehicle position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehiclePosition {
    /// Upstream device identifier.
    pub device_id: String,

    /// The company's fleet number for this device ("interno").
    pub fleet_number: String,

    /// Decimal WGS84 position.
    pub position: Coordinates,

    /// Speed in km/h.
    pub speed_kmh: f64,

    /// Heading in degrees, 0 = north, when reported.
    pub heading_deg: Option<f64>,

    /// Whether the device is currently reporting.
    pub online: bool,

    /// Timestamp of the last GPS fix, passed through from the feed.
    pub fixed_at: Option<String>,

    /// Seconds parked, when reported.
    pub parked_secs: Option<i64>,

    /// Direction the vehicle is most plausibly running.
    pub direction: RouteId,
}

impl VehiclePosition {
    /// Whether the fix is too old to show as a moving vehicle.
    pub fn is_stale(&self) -> bool {
        self.parked_secs.is_some_and(|s| s > STALE_PARK_SECS)
    }
}

//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair.
///
/// Used for stop positions and live vehicle positions. The core arrival
/// calculator never reads coordinates; they exist for the map display and
/// for inferring which direction a vehicle is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another coordinate, in kilometres.
    ///
    /// Haversine formula; plenty accurate for a 15 km bus corridor.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

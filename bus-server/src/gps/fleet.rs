//! Fleet metadata and direction inference.

use std::collections::HashMap;

use crate::domain::{Coordinates, RouteId};

use super::types::{DeviceStatusDto, VehiclePosition};

/// The Santa Fe terminal, origin of the outbound route.
pub const TERMINAL_SANTA_FE: Coordinates = Coordinates {
    lat: -31.6442377,
    lng: -60.70065952,
};

/// The Monte Vera depot, origin of the inbound route.
pub const DEPOT_MONTE_VERA: Coordinates = Coordinates {
    lat: -31.50918773,
    lng: -60.67810577,
};

/// Maps tracker device ids to the company's fleet numbers and decodes
/// feed rows into [`VehiclePosition`]s.
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    fleet_numbers: HashMap<String, String>,
}

impl FleetRegistry {
    /// An empty registry: fleet numbers fall back to raw device ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry for the current fleet.
    pub fn current() -> Self {
        const DEVICES: [(&str, &str); 7] = [
            ("20007", "5"),
            ("20006", "7"),
            ("20011", "8"),
            ("20009", "13"),
            ("20010", "14"),
            ("20013", "17"),
            ("20008", "20"),
        ];

        Self {
            fleet_numbers: DEVICES
                .iter()
                .map(|&(dev, fleet)| (dev.to_string(), fleet.to_string()))
                .collect(),
        }
    }

    /// The fleet number ("interno") painted on the bus, or the raw device
    /// id for devices not yet registered.
    pub fn fleet_number<'a>(&'a self, device_id: &'a str) -> &'a str {
        self.fleet_numbers
            .get(device_id)
            .map(String::as_str)
            .unwrap_or(device_id)
    }

    /// Decode a feed row into a map-ready position.
    ///
    /// Coordinates arrive in micro-degrees; everything else is passed
    /// through with defaults for omitted fields.
    pub fn decode(&self, dto: DeviceStatusDto) -> VehiclePosition {
        let position = Coordinates::new(dto.lat / 1_000_000.0, dto.lng / 1_000_000.0);

        VehiclePosition {
            fleet_number: self.fleet_number(&dto.id).to_string(),
            direction: infer_direction(&position),
            device_id: dto.id,
            position,
            speed_kmh: dto.sp.unwrap_or(0.0),
            heading_deg: dto.hx,
            online: dto.ol == Some(1),
            fixed_at: dto.gt,
            parked_secs: dto.pk,
        }
    }
}

/// Guess which direction a vehicle is running from its position alone.
///
/// A bus near the Santa Fe terminal is presumed outbound toward Monte
/// Vera, and vice versa. Crude, but the feed carries no trip assignment
/// and the corridor is a single line.
pub fn infer_direction(position: &Coordinates) -> RouteId {
    if position.distance_km(&TERMINAL_SANTA_FE) < position.distance_km(&DEPOT_MONTE_VERA) {
        RouteId::SantaFeMonteVera
    } else {
        RouteId::MonteVeraSantaFe
    }
}

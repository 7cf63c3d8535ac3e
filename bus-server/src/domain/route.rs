//! Route identifiers and metadata.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {input}")]
pub struct UnknownRoute {
    input: String,
}

/// One direction of the Santa Fe ↔ Monte Vera line.
///
/// The network runs exactly two directed routes. Keeping them as a closed
/// enum means every lookup keyed by route is exhaustive; there is no
/// stringly-typed route key anywhere past the web boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteId {
    /// Santa Fe terminal → Monte Vera depot.
    #[serde(rename = "santafe_montevera")]
    SantaFeMonteVera,
    /// Monte Vera depot → Santa Fe terminal.
    #[serde(rename = "montevera_santafe")]
    MonteVeraSantaFe,
}

impl RouteId {
    /// Both directions, in published order.
    pub const ALL: [RouteId; 2] = [RouteId::SantaFeMonteVera, RouteId::MonteVeraSantaFe];

    /// Parse the route key used in URLs and the published data
    /// (`santafe_montevera` / `montevera_santafe`).
    pub fn parse(s: &str) -> Result<Self, UnknownRoute> {
        match s {
            "santafe_montevera" => Ok(RouteId::SantaFeMonteVera),
            "montevera_santafe" => Ok(RouteId::MonteVeraSantaFe),
            other => Err(UnknownRoute {
                input: other.to_string(),
            }),
        }
    }

    /// Stable key, as used in URLs and the published data files.
    pub fn key(&self) -> &'static str {
        match self {
            RouteId::SantaFeMonteVera => "santafe_montevera",
            RouteId::MonteVeraSantaFe => "montevera_santafe",
        }
    }

    /// Short code used to build cosmetic bus identifiers ("SFMV1230").
    pub fn short_code(&self) -> &'static str {
        match self {
            RouteId::SantaFeMonteVera => "SFMV",
            RouteId::MonteVeraSantaFe => "MVSF",
        }
    }

    /// Display name, arrow included, as printed on the timetable posters.
    pub fn display_name(&self) -> &'static str {
        match self {
            RouteId::SantaFeMonteVera => "Santa Fe → Monte Vera",
            RouteId::MonteVeraSantaFe => "Monte Vera → Santa Fe",
        }
    }

    /// Nominal end-to-end running time.
    pub fn nominal_duration(&self) -> Duration {
        // Both directions are published at 55 minutes
        Duration::minutes(55)
    }

    /// Brand color used on the map and the timetable cards.
    pub fn color(&self) -> &'static str {
        match self {
            RouteId::SantaFeMonteVera => "#1565C0",
            RouteId::MonteVeraSantaFe => "#2E7D32",
        }
    }

    /// The opposite direction.
    pub fn reversed(&self) -> RouteId {
        match self {
            RouteId::SantaFeMonteVera => RouteId::MonteVeraSantaFe,
            RouteId::MonteVeraSantaFe => RouteId::SantaFeMonteVera,
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

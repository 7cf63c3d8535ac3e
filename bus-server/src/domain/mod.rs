//! Domain types for the bus line.
//!
//! This module contains the core domain model: route and stop identifiers,
//! fare-zone localities, coordinates, and time parsing. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod geo;
mod locality;
mod route;
mod stop;
mod time;

pub use geo::Coordinates;
pub use locality::{Locality, UnknownLocality};
pub use route::{RouteId, UnknownRoute};
pub use stop::{InvalidStopCode, StopCode};
pub use time::{TimeError, TravelOffset, parse_hhmm};

//! Data transfer objects for web requests and responses.
//!
//! The JSON shapes mirror what the site's frontend has always consumed:
//! camelCase keys, an ISO-ish local timestamp, and a flattened no-service
//! result (zero minutes, empty departure and bus id) instead of a null.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Locality, RouteId};
use crate::fares::FareMatrix;
use crate::gps::VehiclePosition;
use crate::mailer::ContactMessage;
use crate::schedule::{Stop, StopForecast};

use super::format;

fn datetime_str(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn departure_str(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Query for the arrivals endpoint.
#[derive(Debug, Deserialize)]
pub struct ArrivalQuery {
    /// Route key ("santafe_montevera" / "montevera_santafe")
    pub route: String,

    /// Stop code ("MV07")
    pub stop: String,
}

/// The second soonest bus, when today still has one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowingBusDto {
    pub arrival_time: String,
    pub minutes_to_arrival: i64,
    pub departure_time: String,
}

/// Response of the arrivals endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalResponse {
    pub next_bus_arrival: String,
    pub minutes_to_arrival: i64,
    pub current_time: String,
    pub departure_time: String,
    pub bus_id: String,
    pub status: crate::schedule::ArrivalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_bus: Option<FollowingBusDto>,
}

impl ArrivalResponse {
    pub fn from_forecast(forecast: &StopForecast) -> Self {
        match &forecast.next {
            Some(next) => Self {
                next_bus_arrival: datetime_str(next.arrival),
                minutes_to_arrival: next.minutes,
                current_time: datetime_str(forecast.queried_at),
                departure_time: departure_str(next.departure),
                bus_id: next.bus_id.clone(),
                status: forecast.status,
                following_bus: forecast.following.as_ref().map(|bus| FollowingBusDto {
                    arrival_time: datetime_str(bus.arrival),
                    minutes_to_arrival: bus.minutes,
                    departure_time: departure_str(bus.departure),
                }),
            },
            None => Self {
                next_bus_arrival: datetime_str(forecast.queried_at),
                minutes_to_arrival: 0,
                current_time: datetime_str(forecast.queried_at),
                departure_time: String::new(),
                bus_id: String::new(),
                status: forecast.status,
                following_bus: None,
            },
        }
    }
}

/// Query for the stops endpoint.
#[derive(Debug, Deserialize)]
pub struct StopsQuery {
    pub route: String,
}

/// Route metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub duration_mins: i64,
    pub stops_count: usize,
}

impl RouteDto {
    pub fn new(route: RouteId, stops_count: usize) -> Self {
        Self {
            id: route.key(),
            code: route.short_code(),
            name: route.display_name(),
            color: route.color(),
            duration_mins: route.nominal_duration().num_minutes(),
            stops_count,
        }
    }
}

/// One stop row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub locality: String,
    pub lat: f64,
    pub lng: f64,
    pub time_from_origin: String,
}

impl StopDto {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.code.to_string(),
            name: stop.name.clone(),
            locality: stop.locality.display_name().to_string(),
            lat: stop.position.lat,
            lng: stop.position.lng,
            time_from_origin: format::format_offset(stop.offset.as_secs()),
        }
    }
}

/// Response of the stops endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsResponse {
    pub route: RouteDto,
    pub stops: Vec<StopDto>,
}

/// Query for the fares endpoint; both-or-neither of `from`/`to`.
#[derive(Debug, Deserialize)]
pub struct FareQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// One priced pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDto {
    pub from: &'static str,
    pub to: &'static str,
    pub centavos: u32,
    pub display: String,
}

impl FareDto {
    pub fn new(from: Locality, to: Locality, centavos: u32) -> Self {
        Self {
            from: from.display_name(),
            to: to.display_name(),
            centavos,
            display: format::format_pesos(centavos),
        }
    }
}

/// Response of the fares endpoint without a pair filter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaresResponse {
    pub effective_from: String,
    pub payment: &'static str,
    pub fares: Vec<FareDto>,
}

impl FaresResponse {
    pub fn from_matrix(matrix: &FareMatrix) -> Self {
        Self {
            effective_from: matrix.effective_from().format("%Y-%m-%d").to_string(),
            payment: "SUBE",
            fares: matrix
                .all_fares()
                .into_iter()
                .map(|(from, to, price)| FareDto::new(from, to, price))
                .collect(),
        }
    }
}

/// One live vehicle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub device_id: String,
    pub fleet_number: String,
    pub lat: f64,
    pub lng: f64,
    pub speed_kmh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
    pub online: bool,
    pub stale: bool,
    pub direction: RouteId,
}

impl VehicleDto {
    pub fn from_position(position: &VehiclePosition) -> Self {
        Self {
            device_id: position.device_id.clone(),
            fleet_number: position.fleet_number.clone(),
            lat: position.position.lat,
            lng: position.position.lng,
            speed_kmh: position.speed_kmh,
            heading_deg: position.heading_deg,
            online: position.online,
            stale: position.is_stale(),
            direction: position.direction,
        }
    }
}

/// Response of the vehicles endpoint.
#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<VehicleDto>,
}

/// Contact form submission, with the field names the form has always sent.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub asunto: String,
    pub mensaje: String,
}

impl ContactRequest {
    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            name: self.nombre,
            email: self.email,
            phone: self.telefono,
            subject: self.asunto,
            message: self.mensaje,
        }
    }
}

/// Success acknowledgement for the contact endpoint.
#[derive(Debug, Serialize)]
pub struct ContactOk {
    pub success: bool,
}

/// Error body for every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

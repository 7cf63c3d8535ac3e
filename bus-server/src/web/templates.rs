//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::RouteId;
use crate::fares::FareMatrix;
use crate::gps::VehiclePosition;
use crate::schedule::{DayType, StopForecast, Timetable};

use super::format;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: timetables, stops, fares, contact form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: Vec<RouteScheduleView>,
    pub fares: Vec<FareRowView>,
    pub fares_effective: String,
}

impl IndexTemplate {
    pub fn build(timetable: &Timetable, fares: &FareMatrix) -> Self {
        Self {
            routes: RouteId::ALL
                .into_iter()
                .map(|route| RouteScheduleView::build(timetable, route))
                .collect(),
            fares: fares
                .all_fares()
                .into_iter()
                .map(|(from, to, price)| FareRowView {
                    from: from.display_name(),
                    to: to.display_name(),
                    price: format::format_pesos(price),
                })
                .collect(),
            fares_effective: fares.effective_from().format("%d/%m/%Y").to_string(),
        }
    }
}

/// Live consultant page: stop picker plus the latest fleet snapshot.
#[derive(Template)]
#[template(path = "consultor.html")]
pub struct ConsultorTemplate {
    pub routes: Vec<RouteOptionView>,
    pub vehicles: Vec<VehicleRowView>,
}

impl ConsultorTemplate {
    pub fn build(timetable: &Timetable, snapshot: &[VehiclePosition]) -> Self {
        Self {
            routes: RouteId::ALL
                .into_iter()
                .map(|route| RouteOptionView {
                    key: route.key(),
                    name: route.display_name(),
                    stops: timetable
                        .stops(route)
                        .iter()
                        .map(|stop| StopOptionView {
                            code: stop.code.to_string(),
                            name: stop.name.clone(),
                        })
                        .collect(),
                })
                .collect(),
            vehicles: snapshot.iter().map(VehicleRowView::from_position).collect(),
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Arrival forecast fragment, swapped into the consultant page.
#[derive(Template)]
#[template(path = "arrival_board.html")]
pub struct ArrivalBoardTemplate {
    pub board: ForecastView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One route's timetable card.
pub struct RouteScheduleView {
    pub name: &'static str,
    pub color: &'static str,
    pub duration_mins: i64,
    pub weekday: Vec<String>,
    pub saturday: Vec<String>,
    pub sunday: Vec<String>,
    pub stops: Vec<StopRowView>,
}

impl RouteScheduleView {
    pub fn build(timetable: &Timetable, route: RouteId) -> Self {
        let times = |day_type: DayType| {
            timetable
                .departures(route, day_type)
                .iter()
                .map(|t| t.format("%H:%M").to_string())
                .collect()
        };

        Self {
            name: route.display_name(),
            color: route.color(),
            duration_mins: route.nominal_duration().num_minutes(),
            weekday: times(DayType::Weekday),
            saturday: times(DayType::Saturday),
            sunday: times(DayType::SundayOrHoliday),
            stops: timetable
                .stops(route)
                .iter()
                .map(|stop| StopRowView {
                    code: stop.code.to_string(),
                    name: stop.name.clone(),
                    locality: stop.locality.display_name(),
                    offset: format::format_offset(stop.offset.as_secs()),
                })
                .collect(),
        }
    }
}

/// One stop row on the stops table.
pub struct StopRowView {
    pub code: String,
    pub name: String,
    pub locality: &'static str,
    pub offset: String,
}

/// One fare table row.
pub struct FareRowView {
    pub from: &'static str,
    pub to: &'static str,
    pub price: String,
}

/// A route option with its stops, for the consultant picker.
pub struct RouteOptionView {
    pub key: &'static str,
    pub name: &'static str,
    pub stops: Vec<StopOptionView>,
}

/// A stop option in the picker.
pub struct StopOptionView {
    pub code: String,
    pub name: String,
}

/// One live vehicle row.
pub struct VehicleRowView {
    pub fleet_number: String,
    pub direction: &'static str,
    pub speed: String,
    pub online: bool,
    pub stale: bool,
}

impl VehicleRowView {
    pub fn from_position(position: &VehiclePosition) -> Self {
        Self {
            fleet_number: position.fleet_number.clone(),
            direction: position.direction.display_name(),
            speed: format!("{:.0} km/h", position.speed_kmh),
            online: position.online,
            stale: position.is_stale(),
        }
    }
}

/// Rendered forecast for the fragment template.
pub struct ForecastView {
    pub stop_code: String,
    pub message: &'static str,
    pub css_class: &'static str,
    pub next: Option<EtaView>,
    pub following: Option<EtaView>,
}

/// One rendered arrival.
pub struct EtaView {
    pub arrival_time: String,
    pub wait_text: String,
    pub departure: String,
    pub bus_id: String,
}

impl EtaView {
    fn from_eta(eta: &crate::schedule::BusEta) -> Self {
        Self {
            arrival_time: eta.arrival.format("%H:%M").to_string(),
            wait_text: format::format_minutes(eta.minutes),
            departure: eta.departure.format("%H:%M").to_string(),
            bus_id: eta.bus_id.clone(),
        }
    }
}

impl ForecastView {
    pub fn from_forecast(forecast: &StopForecast) -> Self {
        let minutes = forecast.next.as_ref().map(|next| next.minutes).unwrap_or(0);

        Self {
            stop_code: forecast.stop.to_string(),
            message: format::status_message(forecast.status, minutes),
            css_class: format::StatusCategory::from_minutes(minutes).css_class(),
            next: forecast.next.as_ref().map(EtaView::from_eta),
            following: forecast.following.as_ref().map(EtaView::from_eta),
        }
    }
}

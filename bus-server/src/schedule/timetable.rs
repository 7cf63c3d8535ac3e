//! The static timetable store.
//!
//! Holds, per route, the ordered stop list (with travel offsets from the
//! origin) and the origin departure list for each day-type variant. All of
//! it is parsed and validated once at startup; queries never see malformed
//! data. Lookups are keyed by the closed [`RouteId`] and [`DayType`] enums,
//! so they are total: there is no "route missing from the map" case at
//! call time.

use chrono::NaiveTime;

use crate::domain::{
    Coordinates, InvalidStopCode, Locality, RouteId, StopCode, TimeError, TravelOffset, parse_hhmm,
};

use super::calendar::DayType;

/// A stop on a route.
#[derive(Debug, Clone)]
pub struct Stop {
    pub code: StopCode,
    pub name: String,
    pub locality: Locality,
    pub position: Coordinates,
    /// Nominal travel time from the route origin to this stop.
    pub offset: TravelOffset,
}

/// Errors detected while building the timetable.
///
/// These indicate broken published data and are raised at startup, never
/// during a query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimetableError {
    #[error("route {route}: bad stop code {code:?}: {source}")]
    BadStopCode {
        route: RouteId,
        code: String,
        source: InvalidStopCode,
    },

    #[error("route {route}: bad time {value:?}: {source}")]
    BadTime {
        route: RouteId,
        value: String,
        source: TimeError,
    },

    #[error("route {route}: duplicate stop {code}")]
    DuplicateStop { route: RouteId, code: StopCode },

    #[error("route {route}: stop {code} has a smaller offset than the stop before it")]
    OffsetsNotMonotonic { route: RouteId, code: StopCode },

    #[error("route {route}: {day_type:?} departures are not in ascending order")]
    DeparturesNotSorted { route: RouteId, day_type: DayType },

    #[error("route {route}: no {day_type:?} departures")]
    NoDepartures { route: RouteId, day_type: DayType },

    #[error("route {route}: no stops")]
    NoStops { route: RouteId },
}

/// Origin departures for the three day-type variants of one route.
#[derive(Debug, Clone, Default)]
struct VariantDepartures {
    weekday: Vec<NaiveTime>,
    saturday: Vec<NaiveTime>,
    sunday_or_holiday: Vec<NaiveTime>,
}

impl VariantDepartures {
    fn for_day(&self, day_type: DayType) -> &[NaiveTime] {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Saturday => &self.saturday,
            DayType::SundayOrHoliday => &self.sunday_or_holiday,
        }
    }

    fn for_day_mut(&mut self, day_type: DayType) -> &mut Vec<NaiveTime> {
        match day_type {
            DayType::Weekday => &mut self.weekday,
            DayType::Saturday => &mut self.saturday,
            DayType::SundayOrHoliday => &mut self.sunday_or_holiday,
        }
    }
}

/// One route's validated schedule data.
#[derive(Debug, Clone)]
struct RouteSchedule {
    stops: Vec<Stop>,
    departures: VariantDepartures,
}

/// The validated, immutable timetable for the whole line.
#[derive(Debug, Clone)]
pub struct Timetable {
    santafe_montevera: RouteSchedule,
    montevera_santafe: RouteSchedule,
}

impl Timetable {
    fn schedule(&self, route: RouteId) -> &RouteSchedule {
        match route {
            RouteId::SantaFeMonteVera => &self.santafe_montevera,
            RouteId::MonteVeraSantaFe => &self.montevera_santafe,
        }
    }

    /// Origin departures for a route on a given day type, ascending.
    pub fn departures(&self, route: RouteId, day_type: DayType) -> &[NaiveTime] {
        self.schedule(route).departures.for_day(day_type)
    }

    /// The ordered stop list of a route.
    pub fn stops(&self, route: RouteId) -> &[Stop] {
        &self.schedule(route).stops
    }

    /// Look up a stop by code on a route.
    ///
    /// Returns `None` when the code does not belong to this route; stop
    /// codes are unique across the network, so a valid code queried against
    /// the wrong route is still absent.
    pub fn stop(&self, route: RouteId, code: StopCode) -> Option<&Stop> {
        self.schedule(route).stops.iter().find(|s| s.code == code)
    }
}

/// Raw stop row, as authored.
struct StopRow {
    code: String,
    name: String,
    locality: Locality,
    position: Coordinates,
    offset: String,
}

/// Raw data for one route.
#[derive(Default)]
struct RouteDraft {
    stops: Vec<StopRow>,
    departures: Vec<(DayType, Vec<String>)>,
}

/// Collects raw rows and validates them into a [`Timetable`].
///
/// Validation enforces what the published data promises: stop codes unique
/// and well-formed, offsets non-decreasing along the route, departures
/// parseable and ascending, and every (route, day-type) variant present.
#[derive(Default)]
pub struct TimetableBuilder {
    santafe_montevera: RouteDraft,
    montevera_santafe: RouteDraft,
}

impl TimetableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn draft_mut(&mut self, route: RouteId) -> &mut RouteDraft {
        match route {
            RouteId::SantaFeMonteVera => &mut self.santafe_montevera,
            RouteId::MonteVeraSantaFe => &mut self.montevera_santafe,
        }
    }

    /// Add a stop row to a route, in travel order.
    pub fn stop(
        mut self,
        route: RouteId,
        code: &str,
        name: &str,
        locality: Locality,
        lat: f64,
        lng: f64,
        offset: &str,
    ) -> Self {
        self.draft_mut(route).stops.push(StopRow {
            code: code.to_string(),
            name: name.to_string(),
            locality,
            position: Coordinates::new(lat, lng),
            offset: offset.to_string(),
        });
        self
    }

    /// Set the departure list for a (route, day-type) variant.
    pub fn departures(mut self, route: RouteId, day_type: DayType, times: &[&str]) -> Self {
        self.draft_mut(route)
            .departures
            .push((day_type, times.iter().map(|s| s.to_string()).collect()));
        self
    }

    /// Validate everything and produce the immutable timetable.
    pub fn build(self) -> Result<Timetable, TimetableError> {
        let santafe_montevera = build_route(RouteId::SantaFeMonteVera, self.santafe_montevera)?;
        let montevera_santafe = build_route(RouteId::MonteVeraSantaFe, self.montevera_santafe)?;
        Ok(Timetable {
            santafe_montevera,
            montevera_santafe,
        })
    }
}

fn build_route(route: RouteId, draft: RouteDraft) -> Result<RouteSchedule, TimetableError> {
    if draft.stops.is_empty() {
        return Err(TimetableError::NoStops { route });
    }

    let mut stops = Vec::with_capacity(draft.stops.len());
    let mut prev_offset: Option<TravelOffset> = None;

    for row in draft.stops {
        let code = StopCode::parse(&row.code).map_err(|source| TimetableError::BadStopCode {
            route,
            code: row.code.clone(),
            source,
        })?;

        if stops.iter().any(|s: &Stop| s.code == code) {
            return Err(TimetableError::DuplicateStop { route, code });
        }

        let offset =
            TravelOffset::parse_hms(&row.offset).map_err(|source| TimetableError::BadTime {
                route,
                value: row.offset.clone(),
                source,
            })?;

        // A later stop can share an offset with its neighbour (the data
        // rounds to whole minutes) but must never travel back in time.
        if let Some(prev) = prev_offset {
            if offset < prev {
                return Err(TimetableError::OffsetsNotMonotonic { route, code });
            }
        }
        prev_offset = Some(offset);

        stops.push(Stop {
            code,
            name: row.name,
            locality: row.locality,
            position: row.position,
            offset,
        });
    }

    let mut departures = VariantDepartures::default();
    for (day_type, raw_times) in draft.departures {
        let parsed = departures.for_day_mut(day_type);
        for raw in raw_times {
            let t = parse_hhmm(&raw).map_err(|source| TimetableError::BadTime {
                route,
                value: raw.clone(),
                source,
            })?;
            parsed.push(t);
        }
    }

    for day_type in DayType::ALL {
        let times = departures.for_day(day_type);
        if times.is_empty() {
            return Err(TimetableError::NoDepartures { route, day_type });
        }
        if times.windows(2).any(|w| w[0] > w[1]) {
            return Err(TimetableError::DeparturesNotSorted { route, day_type });
        }
    }

    Ok(RouteSchedule { stops, departures })
}

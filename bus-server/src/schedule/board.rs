//! Next-bus arrival estimation.
//!
//! Projects the day's origin departures through a stop's travel offset and
//! picks the first and second arrivals still in the future. Pure function of
//! the static schedule data and the query instant: no I/O, no clock reads,
//! no shared mutable state, so concurrent queries need no locking.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::domain::{RouteId, StopCode};

use super::calendar::{DayType, HolidayCalendar};
use super::timetable::Timetable;

/// Errors from an arrival query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The stop code does not belong to the queried route. A config or
    /// caller error, never silently substituted with a default stop.
    #[error("stop {stop} is not on route {route}")]
    UnknownStop { route: RouteId, stop: StopCode },
}

/// Coarse classification of the next arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalStatus {
    /// Next bus is more than five minutes out.
    Upcoming,
    /// Next bus reaches the stop within five minutes.
    Approaching,
    /// No remaining trip reaches this stop today.
    NoService,
}

/// One projected arrival at the queried stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusEta {
    /// When the bus reaches the stop.
    pub arrival: NaiveDateTime,
    /// Whole minutes until arrival, rounded half-up from milliseconds.
    pub minutes: i64,
    /// Origin departure time of the trip producing this arrival.
    pub departure: NaiveTime,
    /// Cosmetic trip label: route short code plus "HHMM" of the departure.
    /// Not unique across days.
    pub bus_id: String,
}

/// Result of one arrival query. Built fresh per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopForecast {
    pub route: RouteId,
    pub stop: StopCode,
    pub queried_at: NaiveDateTime,
    pub day_type: DayType,
    pub status: ArrivalStatus,
    /// First future arrival; `None` exactly when `status` is `NoService`.
    pub next: Option<BusEta>,
    /// Second future arrival, if today's schedule has one.
    pub following: Option<BusEta>,
}

/// The arrival calculator.
///
/// Owns shared handles to the validated timetable and the holiday calendar;
/// cheap to clone into handlers.
#[derive(Debug, Clone)]
pub struct ArrivalBoard {
    timetable: Arc<Timetable>,
    calendar: Arc<HolidayCalendar>,
}

impl ArrivalBoard {
    pub fn new(timetable: Arc<Timetable>, calendar: Arc<HolidayCalendar>) -> Self {
        Self {
            timetable,
            calendar,
        }
    }

    /// The timetable this board reads from.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Compute the next (and following) arrival of `route` at `stop`,
    /// as seen at the local instant `now`.
    ///
    /// Trips are projected onto `now`'s calendar date: a trip departing the
    /// origin before `now` but still travelling toward this stop counts, a
    /// trip that already passed the stop does not. Late-night trips are not
    /// rolled over to the next service day; just after midnight the board
    /// reads the new day's schedule from its first departure.
    pub fn lookup(
        &self,
        route: RouteId,
        stop: StopCode,
        now: NaiveDateTime,
    ) -> Result<StopForecast, BoardError> {
        let stop_info = self
            .timetable
            .stop(route, stop)
            .ok_or(BoardError::UnknownStop { route, stop })?;

        let day_type = self.calendar.day_type(now.date());
        let offset = stop_info.offset.as_duration();

        // Project every departure to its arrival at this stop and keep the
        // ones still strictly in the future. The offset is constant per
        // stop, so departure order already implies arrival order, but the
        // sort keeps the "earliest future arrival" guarantee independent of
        // how the data was authored.
        let mut candidates: Vec<(NaiveTime, NaiveDateTime)> = self
            .timetable
            .departures(route, day_type)
            .iter()
            .map(|&dep| (dep, now.date().and_time(dep) + offset))
            .filter(|&(_, arrival)| arrival > now)
            .collect();
        candidates.sort_by_key(|&(_, arrival)| arrival);

        let mut upcoming = candidates.into_iter();
        let next = upcoming
            .next()
            .map(|(dep, arrival)| BusEta::project(route, dep, arrival, now, true));
        let following = upcoming
            .next()
            .map(|(dep, arrival)| BusEta::project(route, dep, arrival, now, false));

        let status = match &next {
            None => ArrivalStatus::NoService,
            Some(eta) if eta.minutes <= 5 => ArrivalStatus::Approaching,
            Some(_) => ArrivalStatus::Upcoming,
        };

        Ok(StopForecast {
            route,
            stop,
            queried_at: now,
            day_type,
            status,
            next,
            following,
        })
    }
}

impl BusEta {
    fn project(
        route: RouteId,
        departure: NaiveTime,
        arrival: NaiveDateTime,
        now: NaiveDateTime,
        clamp: bool,
    ) -> Self {
        let raw = round_to_minutes(arrival - now);
        let minutes = if clamp { raw.max(0) } else { raw };
        Self {
            arrival,
            minutes,
            departure,
            bus_id: format!("{}{}", route.short_code(), departure.format("%H%M")),
        }
    }
}

/// Round a duration to whole minutes, half-up, in millisecond arithmetic.
fn round_to_minutes(d: Duration) -> i64 {
    (d.num_milliseconds() + 30_000).div_euclid(60_000)
}

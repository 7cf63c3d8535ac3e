//! Unit tests for the arrival calculator.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use super::*;
use crate::domain::{Locality, RouteId, StopCode};

const ROUTE: RouteId = RouteId::SantaFeMonteVera;

fn stop_code(s: &str) -> StopCode {
    StopCode::parse(s).unwrap()
}

/// 2025-03-10 is a Monday.
fn weekday_at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// A small fixture: departures 07:00 / 08:05 / 09:00 on weekdays, a lone
/// 10:00 on Saturdays and Sundays; the probe stop sits 15 minutes from
/// the origin.
fn fixture_board() -> ArrivalBoard {
    let timetable = TimetableBuilder::new()
        .stop(ROUTE, "MV00", "ORIGEN", Locality::SantaFe, -31.64, -60.70, "00:00:00")
        .stop(ROUTE, "MV01", "QUINCE", Locality::SantaFe, -31.62, -60.69, "00:15:00")
        .departures(ROUTE, DayType::Weekday, &["07:00", "08:05", "09:00"])
        .departures(ROUTE, DayType::Saturday, &["10:00"])
        .departures(ROUTE, DayType::SundayOrHoliday, &["10:00"])
        .stop(ROUTE.reversed(), "MV49", "VUELTA", Locality::MonteVera, -31.51, -60.68, "00:00:00")
        .departures(ROUTE.reversed(), DayType::Weekday, &["08:00"])
        .departures(ROUTE.reversed(), DayType::Saturday, &["08:00"])
        .departures(ROUTE.reversed(), DayType::SundayOrHoliday, &["08:00"])
        .build()
        .unwrap();

    ArrivalBoard::new(Arc::new(timetable), Arc::new(argentine_holidays_2025()))
}

#[test]
fn next_bus_thirty_minutes_out() {
    let board = fixture_board();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(7, 50, 0))
        .unwrap();

    assert_eq!(forecast.day_type, DayType::Weekday);
    assert_eq!(forecast.status, ArrivalStatus::Upcoming);

    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "08:05");
    assert_eq!(next.arrival, weekday_at(8, 20, 0));
    assert_eq!(next.minutes, 30);
    assert_eq!(next.bus_id, "SFMV0805");
}

#[test]
fn approaching_within_five_minutes() {
    let board = fixture_board();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 18, 0))
        .unwrap();

    assert_eq!(forecast.status, ArrivalStatus::Approaching);
    let next = forecast.next.unwrap();
    assert_eq!(next.arrival, weekday_at(8, 20, 0));
    assert_eq!(next.minutes, 2);
}

#[test]
fn passed_arrival_is_discarded() {
    let board = fixture_board();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 21, 0))
        .unwrap();

    // The 08:05 trip reached the stop at 08:20; the board moves on
    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "09:00");
    assert_eq!(next.arrival, weekday_at(9, 15, 0));
    assert!(forecast.following.is_none());
}

#[test]
fn arrival_exactly_now_is_not_future() {
    let board = fixture_board();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 20, 0))
        .unwrap();

    // Strictly-after comparison: an arrival at this very second is gone
    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "09:00");
}

#[test]
fn bus_en_route_still_counts() {
    let board = fixture_board();
    // 08:10: the 08:05 bus left the origin five minutes ago but needs ten
    // more minutes to reach this stop
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 10, 0))
        .unwrap();

    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "08:05");
    assert_eq!(next.minutes, 10);
}

#[test]
fn exhausted_day_reports_no_service() {
    let board = fixture_board();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(9, 20, 0))
        .unwrap();

    assert_eq!(forecast.status, ArrivalStatus::NoService);
    assert!(forecast.next.is_none());
    assert!(forecast.following.is_none());
}

#[test]
fn following_bus_is_populated() {
    let board = fixture_board();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(6, 0, 0))
        .unwrap();

    let next = forecast.next.unwrap();
    let following = forecast.following.unwrap();

    assert_eq!(next.departure.format("%H:%M").to_string(), "07:00");
    assert_eq!(following.departure.format("%H:%M").to_string(), "08:05");
    assert!(following.arrival > next.arrival);
    assert!(following.minutes >= next.minutes);
}

#[test]
fn unknown_stop_is_an_error() {
    let board = fixture_board();

    let err = board
        .lookup(ROUTE, stop_code("ZZ99"), weekday_at(8, 0, 0))
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::UnknownStop {
            route: ROUTE,
            stop: stop_code("ZZ99"),
        }
    );

    // A stop that exists, but on the other direction
    let err = board
        .lookup(ROUTE, stop_code("MV49"), weekday_at(8, 0, 0))
        .unwrap_err();
    assert!(matches!(err, BoardError::UnknownStop { .. }));
}

#[test]
fn holiday_on_wednesday_uses_sunday_departures() {
    let board = fixture_board();
    // 2025-07-09 (Independence Day) is a Wednesday
    let now = NaiveDate::from_ymd_opt(2025, 7, 9)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap();

    let forecast = board.lookup(ROUTE, stop_code("MV01"), now).unwrap();

    assert_eq!(forecast.day_type, DayType::SundayOrHoliday);
    let next = forecast.next.unwrap();
    // The weekday 07:00/08:05 trips do not run; the Sunday 10:00 does
    assert_eq!(next.departure.format("%H:%M").to_string(), "10:00");
}

#[test]
fn saturday_and_sunday_sides_of_midnight_use_different_variants() {
    let timetable = TimetableBuilder::new()
        .stop(ROUTE, "MV01", "PROBE", Locality::SantaFe, -31.62, -60.69, "00:45:00")
        .departures(ROUTE, DayType::Weekday, &["12:00"])
        .departures(ROUTE, DayType::Saturday, &["23:30"])
        .departures(ROUTE, DayType::SundayOrHoliday, &["06:00"])
        .stop(ROUTE.reversed(), "MV49", "VUELTA", Locality::MonteVera, -31.51, -60.68, "00:00:00")
        .departures(ROUTE.reversed(), DayType::Weekday, &["08:00"])
        .departures(ROUTE.reversed(), DayType::Saturday, &["08:00"])
        .departures(ROUTE.reversed(), DayType::SundayOrHoliday, &["08:00"])
        .build()
        .unwrap();
    let board = ArrivalBoard::new(Arc::new(timetable), Arc::new(HolidayCalendar::empty()));

    // Saturday 2025-03-15 23:59:59: the 23:30 Saturday trip is still short
    // of the stop (arrives 00:15 on Sunday by the clock, same service day)
    let late_saturday = NaiveDate::from_ymd_opt(2025, 3, 15)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let forecast = board.lookup(ROUTE, stop_code("MV01"), late_saturday).unwrap();
    assert_eq!(forecast.day_type, DayType::Saturday);
    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "23:30");
    assert_eq!(
        next.arrival,
        NaiveDate::from_ymd_opt(2025, 3, 16)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap()
    );

    // Two seconds later it is Sunday: the schedule restarts from the Sunday
    // variant, and the Saturday trip still rolling toward the stop is no
    // longer visible. Pinned deliberately: candidates are always built on
    // the query date.
    let early_sunday = NaiveDate::from_ymd_opt(2025, 3, 16)
        .unwrap()
        .and_hms_opt(0, 0, 1)
        .unwrap();
    let forecast = board.lookup(ROUTE, stop_code("MV01"), early_sunday).unwrap();
    assert_eq!(forecast.day_type, DayType::SundayOrHoliday);
    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "06:00");
    assert_eq!(
        next.arrival,
        NaiveDate::from_ymd_opt(2025, 3, 16)
            .unwrap()
            .and_hms_opt(6, 45, 0)
            .unwrap()
    );
}

#[test]
fn late_night_trip_projects_past_midnight() {
    let timetable = TimetableBuilder::new()
        .stop(ROUTE, "MV01", "PROBE", Locality::SantaFe, -31.62, -60.69, "01:00:00")
        .departures(ROUTE, DayType::Weekday, &["08:00", "23:55"])
        .departures(ROUTE, DayType::Saturday, &["08:00"])
        .departures(ROUTE, DayType::SundayOrHoliday, &["08:00"])
        .stop(ROUTE.reversed(), "MV49", "VUELTA", Locality::MonteVera, -31.51, -60.68, "00:00:00")
        .departures(ROUTE.reversed(), DayType::Weekday, &["08:00"])
        .departures(ROUTE.reversed(), DayType::Saturday, &["08:00"])
        .departures(ROUTE.reversed(), DayType::SundayOrHoliday, &["08:00"])
        .build()
        .unwrap();
    let board = ArrivalBoard::new(Arc::new(timetable), Arc::new(HolidayCalendar::empty()));

    // Monday 23:40: the 23:55 trip arrives 00:55 on Tuesday's date,
    // by plain duration arithmetic, 75 minutes out
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(23, 40, 0))
        .unwrap();
    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "23:55");
    assert_eq!(
        next.arrival,
        NaiveDate::from_ymd_opt(2025, 3, 11)
            .unwrap()
            .and_hms_opt(0, 55, 0)
            .unwrap()
    );
    assert_eq!(next.minutes, 75);

    // Tuesday 00:10: Monday's 23:55 trip is still en route to the stop,
    // but the board now reads Tuesday's schedule, so the earliest visible
    // arrival is Tuesday's own 08:00 departure
    let after_midnight = NaiveDate::from_ymd_opt(2025, 3, 11)
        .unwrap()
        .and_hms_opt(0, 10, 0)
        .unwrap();
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), after_midnight)
        .unwrap();
    let next = forecast.next.unwrap();
    assert_eq!(next.departure.format("%H:%M").to_string(), "08:00");
}

#[test]
fn status_boundary_at_five_minutes() {
    let board = fixture_board();

    // Arrival 08:20; at 08:15 exactly 5 minutes remain → approaching
    let at_five = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 15, 0))
        .unwrap();
    assert_eq!(at_five.next.as_ref().unwrap().minutes, 5);
    assert_eq!(at_five.status, ArrivalStatus::Approaching);

    // At 08:14 six minutes remain → upcoming
    let at_six = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 14, 0))
        .unwrap();
    assert_eq!(at_six.next.as_ref().unwrap().minutes, 6);
    assert_eq!(at_six.status, ArrivalStatus::Upcoming);
}

#[test]
fn seconds_round_half_up() {
    let board = fixture_board();

    // Arrival 08:20:00, now 08:17:30 → 2.5 minutes rounds to 3
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 17, 30))
        .unwrap();
    assert_eq!(forecast.next.unwrap().minutes, 3);

    // now 08:19:31 → 29 s rounds to 0, still a valid future arrival
    let forecast = board
        .lookup(ROUTE, stop_code("MV01"), weekday_at(8, 19, 31))
        .unwrap();
    let next = forecast.next.unwrap();
    assert_eq!(next.minutes, 0);
    assert_eq!(forecast.status, ArrivalStatus::Approaching);
}

#[test]
fn lookup_is_idempotent() {
    let board = fixture_board();
    let now = weekday_at(7, 50, 0);

    let a = board.lookup(ROUTE, stop_code("MV01"), now).unwrap();
    let b = board.lookup(ROUTE, stop_code("MV01"), now).unwrap();
    assert_eq!(a, b);
}

// Spot checks against the published network data.
mod published_data {
    use super::*;
    use crate::schedule::data::montevera_network;

    fn real_board() -> ArrivalBoard {
        ArrivalBoard::new(
            Arc::new(montevera_network().unwrap()),
            Arc::new(argentine_holidays_2025()),
        )
    }

    #[test]
    fn esquiu_stop_weekday_morning() {
        let board = real_board();
        // MV11 (A. del Valle y Esquiú) is 15 minutes from the terminal.
        // At 07:50 the 07:50 departure itself is the next to reach it.
        let forecast = board
            .lookup(ROUTE, stop_code("MV11"), weekday_at(7, 50, 0))
            .unwrap();

        let next = forecast.next.unwrap();
        assert_eq!(next.departure.format("%H:%M").to_string(), "07:50");
        assert_eq!(next.arrival, weekday_at(8, 5, 0));
        assert_eq!(next.minutes, 15);

        let following = forecast.following.unwrap();
        assert_eq!(following.departure.format("%H:%M").to_string(), "08:05");
    }

    #[test]
    fn origin_exhausts_before_the_last_stop() {
        let board = real_board();
        let late = weekday_at(23, 30, 0);

        // At the terminal (offset zero) the 23:10 departure is long gone
        let at_origin = board.lookup(ROUTE, stop_code("MV00"), late).unwrap();
        assert_eq!(at_origin.status, ArrivalStatus::NoService);

        // At the depot end (offset 55 min) the same trip is still coming:
        // 23:10 + 55 = 00:05 past midnight
        let at_depot = board.lookup(ROUTE, stop_code("MV48"), late).unwrap();
        let next = at_depot.next.unwrap();
        assert_eq!(next.departure.format("%H:%M").to_string(), "23:10");
        assert_eq!(next.minutes, 35);
    }

    #[test]
    fn reverse_direction_first_service() {
        let board = real_board();
        let early = weekday_at(4, 30, 0);

        let forecast = board
            .lookup(RouteId::MonteVeraSantaFe, stop_code("MV49"), early)
            .unwrap();
        let next = forecast.next.unwrap();
        assert_eq!(next.departure.format("%H:%M").to_string(), "04:55");
        assert_eq!(next.bus_id, "MVSF0455");
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        /// Strictly increasing departure minutes within a day.
        fn departure_set()(mins in prop::collection::btree_set(0u32..1440, 1..12)) -> Vec<String> {
            mins.iter()
                .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
                .collect()
        }
    }

    fn board_with(departures: &[String], offset_mins: u32) -> ArrivalBoard {
        let dep_refs: Vec<&str> = departures.iter().map(|s| s.as_str()).collect();
        let offset = format!("{:02}:{:02}:00", offset_mins / 60, offset_mins % 60);
        let timetable = TimetableBuilder::new()
            .stop(ROUTE, "MV01", "PROBE", Locality::SantaFe, -31.6, -60.7, &offset)
            .departures(ROUTE, DayType::Weekday, &dep_refs)
            .departures(ROUTE, DayType::Saturday, &dep_refs)
            .departures(ROUTE, DayType::SundayOrHoliday, &dep_refs)
            .stop(ROUTE.reversed(), "MV49", "VUELTA", Locality::MonteVera, -31.5, -60.6, "00:00:00")
            .departures(ROUTE.reversed(), DayType::Weekday, &["08:00"])
            .departures(ROUTE.reversed(), DayType::Saturday, &["08:00"])
            .departures(ROUTE.reversed(), DayType::SundayOrHoliday, &["08:00"])
            .build()
            .unwrap();
        ArrivalBoard::new(Arc::new(timetable), Arc::new(HolidayCalendar::empty()))
    }

    proptest! {
        /// The reported next arrival is the minimum future candidate:
        /// an exhaustive scan finds nothing earlier.
        #[test]
        fn next_is_minimum_future_candidate(
            departures in departure_set(),
            offset_mins in 0u32..120,
            now_secs in 0u32..86_400,
        ) {
            let board = board_with(&departures, offset_mins);
            let now = weekday_at(now_secs / 3600, (now_secs / 60) % 60, now_secs % 60);

            let forecast = board.lookup(ROUTE, stop_code("MV01"), now).unwrap();

            let brute_min = departures
                .iter()
                .map(|d| {
                    now.date().and_time(crate::domain::parse_hhmm(d).unwrap())
                        + chrono::Duration::minutes(i64::from(offset_mins))
                })
                .filter(|arrival| *arrival > now)
                .min();

            match (forecast.next, brute_min) {
                (Some(next), Some(expected)) => {
                    prop_assert_eq!(next.arrival, expected);
                    prop_assert!(next.minutes >= 0);
                }
                (None, None) => prop_assert_eq!(forecast.status, ArrivalStatus::NoService),
                (next, expected) => {
                    prop_assert!(
                        false,
                        "board and brute force disagree: {:?} vs {:?}",
                        next,
                        expected
                    );
                }
            }
        }

        /// Advancing the clock within one day never moves the next
        /// arrival earlier.
        #[test]
        fn next_arrival_is_monotonic_in_now(
            departures in departure_set(),
            offset_mins in 0u32..120,
            t1 in 0u32..86_400,
            t2 in 0u32..86_400,
        ) {
            let (earlier, later) = (t1.min(t2), t1.max(t2));
            let board = board_with(&departures, offset_mins);

            let at = |secs: u32| {
                board
                    .lookup(
                        ROUTE,
                        stop_code("MV01"),
                        weekday_at(secs / 3600, (secs / 60) % 60, secs % 60),
                    )
                    .unwrap()
            };

            if let (Some(a), Some(b)) = (at(earlier).next, at(later).next) {
                prop_assert!(b.arrival >= a.arrival);
            }
        }

        /// Identical inputs give identical forecasts.
        #[test]
        fn lookup_is_pure(
            departures in departure_set(),
            offset_mins in 0u32..120,
            now_secs in 0u32..86_400,
        ) {
            let board = board_with(&departures, offset_mins);
            let now = weekday_at(now_secs / 3600, (now_secs / 60) % 60, now_secs % 60);

            prop_assert_eq!(
                board.lookup(ROUTE, stop_code("MV01"), now).unwrap(),
                board.lookup(ROUTE, stop_code("MV01"), now).unwrap()
            );
        }

        /// Whenever a next bus exists its minutes are non-negative, and a
        /// following bus never undercuts it.
        #[test]
        fn minutes_non_negative_and_ordered(
            departures in departure_set(),
            offset_mins in 0u32..120,
            now_secs in 0u32..86_400,
        ) {
            let board = board_with(&departures, offset_mins);
            let now = weekday_at(now_secs / 3600, (now_secs / 60) % 60, now_secs % 60);

            let forecast = board.lookup(ROUTE, stop_code("MV01"), now).unwrap();
            if let Some(next) = &forecast.next {
                prop_assert!(next.minutes >= 0);
                if let Some(following) = &forecast.following {
                    prop_assert!(following.minutes >= next.minutes);
                    prop_assert!(following.arrival > next.arrival);
                }
            } else {
                prop_assert!(forecast.following.is_none());
            }
        }
    }
}

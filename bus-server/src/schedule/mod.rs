//! The schedule core.
//!
//! Everything needed to answer "when does the next bus reach this stop":
//! the validated timetable store, day-type classification with the holiday
//! calendar, and the arrival calculator. All data is immutable after
//! startup and every query is a pure function of it plus the query instant.

mod board;
mod calendar;
pub mod data;
mod timetable;

#[cfg(test)]
mod board_tests;

pub use board::{ArrivalBoard, ArrivalStatus, BoardError, BusEta, StopForecast};
pub use calendar::{DayType, HolidayCalendar, argentine_holidays_2025};
pub use timetable::{Stop, Timetable, TimetableBuilder, TimetableError};

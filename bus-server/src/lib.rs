//! Monte Vera bus line web server.
//!
//! Serves the company site (timetables, stops, fares, contact) plus a
//! live feature that estimates when the next scheduled bus reaches a
//! chosen stop, combining the published timetable with each stop's fixed
//! travel offset from the route origin.

pub mod domain;
pub mod fares;
pub mod gps;
pub mod mailer;
pub mod schedule;
pub mod web;

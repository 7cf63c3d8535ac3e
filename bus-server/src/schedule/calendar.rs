//! Day-type classification.
//!
//! The company publishes three timetable variants: weekdays, Saturdays,
//! and Sundays/holidays. A calendar date resolves to exactly one variant;
//! national holidays use the Sunday timetable regardless of which weekday
//! they fall on.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Which timetable variant a calendar date uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Saturday,
    SundayOrHoliday,
}

impl DayType {
    /// All variants, for exhaustive data validation.
    pub const ALL: [DayType; 3] = [DayType::Weekday, DayType::Saturday, DayType::SundayOrHoliday];
}

/// The set of dates that run on the Sunday timetable regardless of weekday.
///
/// The list is year-specific and maintained by hand; it has to be extended
/// each December for the following year.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// An empty calendar: only weekends use non-weekday timetables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a calendar from explicit dates.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: dates.into_iter().collect(),
        }
    }

    /// Number of listed holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Whether the calendar has no listed holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Whether a date is a listed holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Resolve the timetable variant for a date.
    ///
    /// Holidays take precedence over the weekday checks: a holiday falling
    /// on a Tuesday still runs the sparser Sunday service.
    pub fn day_type(&self, date: NaiveDate) -> DayType {
        if self.is_holiday(date) {
            return DayType::SundayOrHoliday;
        }
        match date.weekday() {
            Weekday::Sun => DayType::SundayOrHoliday,
            Weekday::Sat => DayType::Saturday,
            _ => DayType::Weekday,
        }
    }
}

/// The 2025 Argentine national holidays observed by the line.
pub fn argentine_holidays_2025() -> HolidayCalendar {
    const DATES: [(u32, u32); 15] = [
        (1, 1),   // Año Nuevo
        (2, 24),  // Carnaval
        (2, 25),  // Carnaval
        (3, 24),  // Día de la Memoria
        (4, 2),   // Día del Veterano y de los Caídos en Malvinas
        (4, 18),  // Viernes Santo
        (5, 1),   // Día del Trabajador
        (5, 25),  // Revolución de Mayo
        (6, 20),  // Paso a la Inmortalidad del Gral. Belgrano
        (7, 9),   // Día de la Independencia
        (8, 17),  // Paso a la Inmortalidad del Gral. San Martín
        (10, 12), // Día del Respeto a la Diversidad Cultural
        (11, 20), // Día de la Soberanía Nacional
        (12, 8),  // Inmaculada Concepción
        (12, 25), // Navidad
    ];

    HolidayCalendar::from_dates(DATES.iter().map(|&(m, d)| {
        // Fixed constants, verified by the count assertion in tests
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }))
}

//! Clock-time and travel-offset parsing.
//!
//! The published timetable stores origin departures as "HH:MM" strings and
//! each stop's travel time from the origin as "HH:MM:SS". Both are parsed
//! once at data load; nothing downstream ever re-parses a time string.

use chrono::{Duration, NaiveTime};

/// Error returned when parsing an invalid time or offset string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a departure clock time from "HH:MM" format.
///
/// # Examples
///
/// ```
/// use bus_server::domain::parse_hhmm;
///
/// assert!(parse_hhmm("05:40").is_ok());
/// assert!(parse_hhmm("23:10").is_ok());
///
/// assert!(parse_hhmm("0540").is_err());
/// assert!(parse_hhmm("5:40").is_err());
/// assert!(parse_hhmm("24:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();

    if bytes.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Travel time from a route's origin to a stop.
///
/// Parsed from the "HH:MM:SS" strings in the published stop data. Offsets
/// are plain durations: projecting a departure instant forward by an offset
/// may cross midnight, and that is handled by ordinary datetime arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelOffset {
    seconds: u32,
}

impl TravelOffset {
    /// A zero offset (the route origin itself).
    pub const ZERO: TravelOffset = TravelOffset { seconds: 0 };

    /// Parse an offset from "HH:MM:SS" format.
    ///
    /// Hours are not bounded to a day: an offset is elapsed travel time,
    /// not a clock time. Minutes and seconds must be 0-59.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::TravelOffset;
    ///
    /// let offset = TravelOffset::parse_hms("00:15:00").unwrap();
    /// assert_eq!(offset.as_secs(), 15 * 60);
    ///
    /// assert!(TravelOffset::parse_hms("00:15").is_err());
    /// assert!(TravelOffset::parse_hms("00:60:00").is_err());
    /// ```
    pub fn parse_hms(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        if bytes.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hours =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;

        let minutes = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minutes > 59 {
            return Err(TimeError::new("offset minutes must be 0-59"));
        }

        let seconds = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if seconds > 59 {
            return Err(TimeError::new("offset seconds must be 0-59"));
        }

        Ok(Self {
            seconds: hours * 3600 + minutes * 60 + seconds,
        })
    }

    /// Construct an offset from whole minutes.
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            seconds: minutes * 60,
        }
    }

    /// The offset in whole seconds.
    pub fn as_secs(&self) -> u32 {
        self.seconds
    }

    /// The offset as a signed duration, for datetime arithmetic.
    pub fn as_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.seconds))
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

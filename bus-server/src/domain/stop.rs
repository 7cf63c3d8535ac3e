//! Stop code types.

use std::fmt;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A valid stop code: two uppercase ASCII letters followed by two digits.
///
/// Every stop on the network is labelled with a code like `MV07` (line
/// prefix plus a two-digit sequence number). This type guarantees that any
/// `StopCode` value is well-formed by construction.
///
/// # Examples
///
/// ```
/// use bus_server::domain::StopCode;
///
/// let code = StopCode::parse("MV07").unwrap();
/// assert_eq!(code.as_str(), "MV07");
///
/// // Lowercase is rejected by the strict parser
/// assert!(StopCode::parse("mv07").is_err());
///
/// // Wrong shape is rejected
/// assert!(StopCode::parse("MV7").is_err());
/// assert!(StopCode::parse("M007").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopCode([u8; 4]);

impl StopCode {
    /// Parse a stop code from a string.
    ///
    /// The input must be exactly two uppercase ASCII letters followed by
    /// two ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidStopCode {
                reason: "must be exactly 4 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
            return Err(InvalidStopCode {
                reason: "must start with two uppercase ASCII letters",
            });
        }

        if !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
            return Err(InvalidStopCode {
                reason: "must end with two ASCII digits",
            });
        }

        Ok(StopCode([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Parse a stop code, accepting lowercase letters.
    ///
    /// Query-string input arrives in whatever case the user typed; this
    /// uppercases the letters before the strict parse.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStopCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.as_str())
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

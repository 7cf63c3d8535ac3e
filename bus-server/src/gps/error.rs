//! Tracker client error types.

use std::fmt;

/// Errors from the tracker HTTP client.
#[derive(Debug)]
pub enum TrackerError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// The feed answered with a non-zero result code
    Feed { code: i32 },

    /// Upstream returned a non-success HTTP status
    ApiError { status: u16, message: String },

    /// Session key rejected by the feed
    Unauthorized,
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::Http(e) => write!(f, "HTTP error: {e}"),
            TrackerError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TrackerError::Feed { code } => write!(f, "feed error code {code}"),
            TrackerError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            TrackerError::Unauthorized => write!(f, "unauthorized (invalid session key)"),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        TrackerError::Http(err)
    }
}

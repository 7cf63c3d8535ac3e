//! Mailer error types.

use super::message::MessageError;

/// Errors from contact-message dispatch.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// The message failed validation; nothing was sent
    #[error(transparent)]
    Invalid(#[from] MessageError),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key rejected
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited by the email provider
    #[error("rate limited by the email provider")]
    RateLimited,

    /// Provider returned a non-success status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MailerError::Invalid(MessageError::MissingFields);
        assert_eq!(err.to_string(), "Faltan campos requeridos");

        let err = MailerError::ApiError {
            status: 422,
            message: "domain not verified".into(),
        };
        assert_eq!(err.to_string(), "API error 422: domain not verified");

        assert_eq!(
            MailerError::Unauthorized.to_string(),
            "unauthorized (invalid API key)"
        );
    }
}

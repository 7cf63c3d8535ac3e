//! Transactional email client.
//!
//! Sends contact-form messages through a Resend-style `POST /emails`
//! endpoint with bearer-token auth. The sender's address goes into
//! `reply_to` so answering the notification reaches them directly.

use serde::Serialize;

use super::error::MailerError;
use super::message::ContactMessage;

/// Default base URL of the email API.
const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Configuration for the mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// API key for the email provider
    pub api_key: String,
    /// Verified sender address
    pub from: String,
    /// Company inbox that receives the notifications
    pub to: String,
    /// Base URL of the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MailerConfig {
    /// Create a new config.
    pub fn new(
        api_key: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            from: from.into(),
            to: to.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Wire shape of the provider's send request.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    reply_to: &'a str,
    text: String,
}

/// Email API client.
#[derive(Debug, Clone)]
pub struct MailerClient {
    http: reqwest::Client,
    config: MailerConfig,
}

impl MailerClient {
    /// Create a new mailer with the given configuration.
    pub fn new(config: MailerConfig) -> Result<Self, MailerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Validate and dispatch a contact message.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailerError> {
        message.validate()?;

        let phone = message.phone.as_deref().unwrap_or("-");
        let request = SendEmailRequest {
            from: &self.config.from,
            to: [self.config.to.as_str()],
            subject: format!("[Web Monte Vera] {} - De: {}", message.subject, message.name),
            reply_to: &message.email,
            text: format!(
                "Nombre: {}\nEmail: {}\nTeléfono: {}\n\n{}",
                message.name, message.email, phone, message.message
            ),
        };

        let url = format!("{}/emails", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MailerError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MailerError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}

//! Contact form messages and their validation.

use serde::Deserialize;

/// Validation failures for a contact message.
///
/// Display strings are user-visible and shown verbatim on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("Faltan campos requeridos")]
    MissingFields,
    #[error("Formato de email inválido")]
    InvalidEmail,
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    /// Sender's name.
    pub name: String,
    /// Sender's email, used as the reply-to address.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Check required fields and the email shape.
    ///
    /// Name, email, subject, and body are required; phone is not. The
    /// email check only enforces the `local@domain.tld` shape; the
    /// mail provider does the real verification.
    pub fn validate(&self) -> Result<(), MessageError> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(MessageError::MissingFields);
        }

        if !email_is_plausible(&self.email) {
            return Err(MessageError::InvalidEmail);
        }

        Ok(())
    }
}

/// Shape check: non-empty local part, a single `@`, a dotted domain, and
/// no whitespace anywhere.
fn email_is_plausible(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

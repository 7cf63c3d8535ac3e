//! Contact-form email dispatch.
//!
//! Validates submitted messages and forwards them to the company inbox
//! through a transactional email provider. Optional at runtime: without an
//! API key the server still runs and the contact endpoint reports the
//! feature as unavailable.

mod client;
mod error;
mod message;

pub use client::{MailerClient, MailerConfig};
pub use error::MailerError;
pub use message::{ContactMessage, MessageError};

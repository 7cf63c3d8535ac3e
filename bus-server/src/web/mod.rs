//! Web layer: axum routes, DTOs, templates, and display formatting.

pub mod dto;
pub mod format;
mod routes;
mod state;
pub mod templates;

pub use routes::{AppError, create_router};
pub use state::AppState;

// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod messages;
pub mod migrations;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{not_found_response, reject_outcome, ApiError, MessageResponse};
pub use helpers::safe_email_log;
pub use messages::Locale;
pub use state::AppState;
pub use validation::{EntityValidator, FailureList};

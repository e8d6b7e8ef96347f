//! Username Registry - in-memory username availability checking
//!
//! Tracks which usernames are taken, counts how often each taken name is
//! requested, and proposes numbered alternatives.

pub mod attempts;
pub mod error;
pub mod registry;
pub mod service;
pub mod suggest;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UsernameError};
pub use types::{
    AttemptSnapshot, AvailabilityStatus, ServiceConfig, SessionReport, UsernameResult,
};

// Re-export main functionality
pub use attempts::AttemptCounter;
pub use registry::{canonicalize, Registry};
pub use service::{UsernameService, NO_ATTEMPTS};
pub use suggest::SuggestionGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

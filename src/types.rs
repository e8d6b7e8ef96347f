//! Core types and structures for username-registry

use crate::error::{Result, UsernameError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable naming a JSON seed file
pub const ENV_SEED_FILE: &str = "USERNAME_SEED_FILE";
/// Environment variable overriding how many suggestions are produced
pub const ENV_SUGGESTIONS: &str = "USERNAME_SUGGESTIONS";
/// Environment variable overriding the suggestion search cap
pub const ENV_MAX_SUGGESTION_ATTEMPTS: &str = "USERNAME_MAX_SUGGESTION_ATTEMPTS";

/// Username availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Taken,
}

impl From<bool> for AvailabilityStatus {
    fn from(available: bool) -> Self {
        if available {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Taken
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
        }
    }
}

/// Configuration for the username service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// How many alternatives `suggest_alternatives` collects
    pub suggestion_count: usize,
    /// Upper bound on suffixes probed per suggestion request
    pub max_suggestion_attempts: usize,
    /// Optional JSON seed file; the built-in seed is used when absent
    pub seed_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            suggestion_count: 3,
            max_suggestion_attempts: 1000,
            seed_path: None,
        }
    }
}

impl ServiceConfig {
    /// Build a configuration from the process environment.
    ///
    /// Call [`crate::init`] first so values from a `.env` file are visible.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_SUGGESTIONS) {
            config.suggestion_count = parse_count(ENV_SUGGESTIONS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_SUGGESTION_ATTEMPTS) {
            config.max_suggestion_attempts = parse_count(ENV_MAX_SUGGESTION_ATTEMPTS, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED_FILE) {
            if !value.trim().is_empty() {
                config.seed_path = Some(PathBuf::from(value.trim()));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the service cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestion_attempts == 0 {
            return Err(crate::config_error!(
                "{} must be greater than zero",
                ENV_MAX_SUGGESTION_ATTEMPTS
            ));
        }
        if self.suggestion_count > self.max_suggestion_attempts {
            return Err(crate::config_error!(
                "{} ({}) cannot exceed {} ({})",
                ENV_SUGGESTIONS,
                self.suggestion_count,
                ENV_MAX_SUGGESTION_ATTEMPTS,
                self.max_suggestion_attempts
            ));
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|e| {
        UsernameError::config(format!("{} has invalid value '{}': {}", key, value, e))
    })
}

/// Point-in-time copy of the attempt counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSnapshot {
    /// `(username, count)` pairs sorted by username
    pub entries: Vec<(String, u64)>,
    pub total_attempts: u64,
}

impl AttemptSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count recorded for a canonical username
    pub fn count_of(&self, username: &str) -> u64 {
        self.entries
            .iter()
            .find(|(name, _)| name == username)
            .map_or(0, |(_, count)| *count)
    }
}

/// Outcome of checking a single username, as reported by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameResult {
    pub username: String,
    pub status: AvailabilityStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Full report for one CLI run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub results: Vec<UsernameResult>,
    pub most_attempted: Option<String>,
    pub attempts: AttemptSnapshot,
}

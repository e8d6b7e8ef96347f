//! Username availability service

use crate::attempts::AttemptCounter;
use crate::error::Result;
use crate::registry::{canonicalize, load_seed, Registry};
use crate::suggest::SuggestionGenerator;
use crate::types::{AttemptSnapshot, ServiceConfig};

/// Reported by [`UsernameService::most_attempted_or_default`] when no attempt exists
pub const NO_ATTEMPTS: &str = "No attempts recorded";

/// Availability checks, popularity tracking and suggestions over one registry.
///
/// Every instance owns its own state, so independent services can coexist.
/// All methods take `&self` and the service is `Send + Sync`; share it across
/// threads with a reference or an `Arc`.
#[derive(Debug)]
pub struct UsernameService {
    registry: Registry,
    attempts: AttemptCounter,
    suggester: SuggestionGenerator,
}

impl Default for UsernameService {
    fn default() -> Self {
        Self::new(Registry::with_defaults())
    }
}

impl UsernameService {
    /// Create a service over `registry` with default suggestion settings
    pub fn new(registry: Registry) -> Self {
        Self::with_parts(registry, SuggestionGenerator::default())
    }

    /// Create a service from explicit parts
    pub fn with_parts(registry: Registry, suggester: SuggestionGenerator) -> Self {
        Self {
            registry,
            attempts: AttemptCounter::new(),
            suggester,
        }
    }

    /// Create a service from configuration, loading the seed file if one is set
    pub fn with_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let registry = match &config.seed_path {
            Some(path) => load_seed(path)?,
            None => Registry::with_defaults(),
        };

        Ok(Self::with_parts(
            registry,
            SuggestionGenerator::from_config(config),
        ))
    }

    /// Whether `username` is free.
    ///
    /// A taken username has its attempt count bumped exactly once per call;
    /// a free one leaves the counters untouched.
    pub fn check_availability(&self, username: &str) -> bool {
        let key = canonicalize(username);

        if self.registry.contains_exact(&key) {
            let count = self.attempts.record_canonical(key);
            tracing::debug!(username = %username, attempts = count, "Username taken");
            false
        } else {
            tracing::debug!(username = %username, "Username available");
            true
        }
    }

    /// Propose free alternatives for `username`
    pub fn suggest_alternatives(&self, username: &str) -> Result<Vec<String>> {
        self.suggester.suggest(&self.registry, username)
    }

    /// Most attempted taken username, if any attempt was recorded
    pub fn most_attempted(&self) -> Option<String> {
        self.attempts.most_attempted()
    }

    /// Most attempted taken username, or [`NO_ATTEMPTS`]
    pub fn most_attempted_or_default(&self) -> String {
        self.most_attempted()
            .unwrap_or_else(|| NO_ATTEMPTS.to_string())
    }

    /// Attempts recorded for `username`
    pub fn attempt_count(&self, username: &str) -> u64 {
        self.attempts.count(username)
    }

    /// Copy of all attempt counters
    pub fn snapshot(&self) -> AttemptSnapshot {
        self.attempts.snapshot()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn suggester(&self) -> &SuggestionGenerator {
        &self.suggester
    }
}

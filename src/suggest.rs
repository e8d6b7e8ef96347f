//! Alternative username suggestions

use crate::error::{Result, UsernameError};
use crate::registry::Registry;
use crate::types::ServiceConfig;

/// Proposes `base1`, `base2`, ... candidates that are not taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionGenerator {
    count: usize,
    max_attempts: usize,
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        let config = ServiceConfig::default();
        Self::new(config.suggestion_count, config.max_suggestion_attempts)
    }
}

impl SuggestionGenerator {
    /// Create a generator collecting `count` names within `max_attempts` suffixes
    pub fn new(count: usize, max_attempts: usize) -> Self {
        Self {
            count,
            max_attempts,
        }
    }

    /// Create a generator from service configuration
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.suggestion_count, config.max_suggestion_attempts)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Collect free candidates for `base` in increasing-suffix order.
    ///
    /// Candidates are checked case-insensitively, like availability checks,
    /// but are returned with the caller's casing. Fails with
    /// [`UsernameError::SuggestionSearchExhausted`] when `max_attempts`
    /// suffixes do not yield enough free names.
    pub fn suggest(&self, registry: &Registry, base: &str) -> Result<Vec<String>> {
        // Never more than `max_attempts` candidates can be collected
        let mut suggestions = Vec::with_capacity(self.count.min(self.max_attempts));
        if self.count == 0 {
            return Ok(suggestions);
        }

        for (attempt, suffix) in (1u64..).enumerate() {
            if attempt >= self.max_attempts {
                tracing::warn!(
                    base = %base,
                    attempts = attempt,
                    found = suggestions.len(),
                    "Suggestion search exhausted"
                );
                return Err(UsernameError::suggestion_exhausted(
                    base,
                    attempt,
                    suggestions.len(),
                ));
            }

            let candidate = format!("{}{}", base, suffix);
            if !registry.is_taken(&candidate) {
                suggestions.push(candidate);
                if suggestions.len() == self.count {
                    break;
                }
            }
        }

        tracing::debug!(base = %base, suggestions = ?suggestions, "Generated suggestions");
        Ok(suggestions)
    }
}

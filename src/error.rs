//! Error handling for username-registry

use thiserror::Error;

/// Main error type for username-registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("No free suggestion for '{base}' after {attempts} attempts ({found} found)")]
    SuggestionSearchExhausted {
        base: String,
        attempts: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl UsernameError {
    /// Create a suggestion-exhausted error
    pub fn suggestion_exhausted(base: impl Into<String>, attempts: usize, found: usize) -> Self {
        Self::SuggestionSearchExhausted {
            base: base.into(),
            attempts,
            found,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::SuggestionSearchExhausted { base, attempts, .. } => {
                format!("⚠️  No alternatives found for '{}' within {} tries\n💡 Try a different base name or raise USERNAME_MAX_SUGGESTION_ATTEMPTS", base, attempts)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
            Self::Parse { message } => {
                format!("❌ Parse error: {}\n💡 Seed files must be a JSON object of username -> owner id", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
        }
    }
}

impl From<serde_json::Error> for UsernameError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UsernameError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::UsernameError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::UsernameError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message() {
        let err = UsernameError::suggestion_exhausted("admin", 1000, 2);
        let text = err.to_string();
        assert!(text.contains("'admin'"));
        assert!(text.contains("1000"));
        assert!(err.user_message().contains("USERNAME_MAX_SUGGESTION_ATTEMPTS"));
    }

    #[test]
    fn test_config_macro() {
        let err = config_error!("bad value {}", 42);
        assert_eq!(err, UsernameError::config("bad value 42"));
        assert!(err.user_message().contains(".env"));
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: UsernameError = json_err.into();
        assert!(matches!(err, UsernameError::Parse { .. }));
        assert!(err.user_message().contains("Seed files"));
    }
}

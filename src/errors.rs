//! Shared error types for the fallible edges of spreadkit.
//!
//! The composition functions in [`crate::sequences`] and [`crate::objects`]
//! never fail. Errors only arise when raw input has to be turned into
//! sequences or objects (CLI arguments) or when configuration is loaded.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spreadkit operations
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was not valid JSON
    #[error("Invalid JSON in {argument}: {source}")]
    InvalidJson {
        argument: String,
        #[source]
        source: serde_json::Error,
    },

    /// An argument parsed, but to the wrong kind of value
    #[error("Expected {expected} for {argument}, got {found}")]
    UnexpectedShape {
        argument: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid JSON error for a named argument
    pub fn invalid_json(argument: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            argument: argument.into(),
            source,
        }
    }

    /// Create a shape mismatch error for a named argument
    pub fn unexpected_shape(
        argument: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::UnexpectedShape {
            argument: argument.into(),
            expected,
            found,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_shape_message_names_argument() {
        let err = Error::unexpected_shape("first object", "an object", "an array");
        assert_eq!(
            err.to_string(),
            "Expected an object for first object, got an array"
        );
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::invalid_json("items", source);
        assert!(err.to_string().starts_with("Invalid JSON in items:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_context_wraps_message() {
        let result: Result<()> = Err(Error::Configuration("bad seed".into()));
        let err = result.context("loading .spreadkit.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading .spreadkit.toml: Configuration error: bad seed"
        );
    }
}

//! Error types for the wordhash library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordHashError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordhash::error::{Result, WordHashError};
//!
//! fn pick_language(code: &str) -> Result<()> {
//!     Err(WordHashError::unsupported_language(code))
//! }
//!
//! match pick_language("xx") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for wordhash operations.
#[derive(Error, Debug)]
pub enum WordHashError {
    /// Analysis-related errors (pattern or automaton construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// No stemming capability exists for the requested language code.
    #[error("Unsupported stemmer language: {0}")]
    UnsupportedLanguage(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordHashError.
pub type Result<T> = std::result::Result<T, WordHashError>;

impl WordHashError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordHashError::Analysis(msg.into())
    }

    /// Create a new unsupported language error.
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        WordHashError::UnsupportedLanguage(language.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordHashError::InvalidConfig(msg.into())
    }

    /// Whether this error was caused by the caller's configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WordHashError::UnsupportedLanguage(_)
                | WordHashError::InvalidConfig(_)
                | WordHashError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordHashError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = WordHashError::unsupported_language("xx");
        assert_eq!(error.to_string(), "Unsupported stemmer language: xx");

        let error = WordHashError::invalid_config("empty language");
        assert_eq!(error.to_string(), "Invalid configuration: empty language");
    }

    #[test]
    fn test_config_error_classification() {
        assert!(WordHashError::unsupported_language("xx").is_config_error());
        assert!(WordHashError::invalid_config("x").is_config_error());
        assert!(!WordHashError::analysis("x").is_config_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = WordHashError::from(json_error);

        match error {
            WordHashError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }
}

//! Per-invocation options for building a term-frequency map.
//!
//! # Examples
//!
//! ```
//! use wordhash::config::WordHashConfig;
//!
//! // Use default configuration
//! let config = WordHashConfig::default();
//! assert!(config.clean_source);
//! assert_eq!(config.stemmer_language, "en");
//!
//! // Keep punctuation fragments and stem Spanish
//! let config = WordHashConfig::default()
//!     .with_clean_source(false)
//!     .with_stemmer_language("es");
//! assert!(!config.clean_source);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordHashError};

/// Default language code for stopwords and stemming.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Options controlling tokenization policy and language.
///
/// Missing keys take their default values when deserialized, and keys the
/// struct does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordHashConfig {
    /// Strip punctuation before tokenizing (clean policy). When `false`,
    /// punctuation fragments are kept as tokens (raw policy).
    pub clean_source: bool,
    /// Language code used for both the stopword table and the stemmer.
    pub stemmer_language: String,
}

impl Default for WordHashConfig {
    fn default() -> Self {
        Self {
            clean_source: true,
            stemmer_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl WordHashConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenization policy.
    pub fn with_clean_source(mut self, clean_source: bool) -> Self {
        self.clean_source = clean_source;
        self
    }

    /// Set the language code.
    pub fn with_stemmer_language<S: Into<String>>(mut self, language: S) -> Self {
        self.stemmer_language = language.into();
        self
    }

    /// Parse options from a JSON object.
    ///
    /// ```
    /// use wordhash::config::WordHashConfig;
    ///
    /// let config = WordHashConfig::from_json(r#"{"clean_source": false, "verbose": 3}"#).unwrap();
    /// assert!(!config.clean_source);
    /// assert_eq!(config.stemmer_language, "en");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The language code as used for lookups: trimmed and lowercased.
    pub fn language(&self) -> String {
        self.stemmer_language.trim().to_lowercase()
    }

    /// Check the options before building a hasher.
    pub fn validate(&self) -> Result<()> {
        if self.language().is_empty() {
            return Err(WordHashError::invalid_config("stemmer_language is empty"));
        }
        Ok(())
    }
}

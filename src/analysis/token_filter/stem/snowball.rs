//! Snowball stemmers for the supported languages.
//!
//! Language codes are two-letter ISO 639-1 codes. The stemmer for a code is
//! resolved once, when [`SnowballStemmer::new`] is called; an unknown code
//! fails there rather than on the first word.
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::token_filter::stem::Stemmer;
//! use wordhash::analysis::token_filter::stem::snowball::SnowballStemmer;
//!
//! let stemmer = SnowballStemmer::new("en").unwrap();
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("runs"), "run");
//!
//! assert!(SnowballStemmer::new("xx").is_err());
//! ```

use rust_stemmers::Algorithm;

use crate::analysis::token_filter::stem::Stemmer;
use crate::error::{Result, WordHashError};

/// Language codes with a Snowball algorithm, in code order.
const LANGUAGES: &[(&str, Algorithm)] = &[
    ("ar", Algorithm::Arabic),
    ("da", Algorithm::Danish),
    ("de", Algorithm::German),
    ("el", Algorithm::Greek),
    ("en", Algorithm::English),
    ("es", Algorithm::Spanish),
    ("fi", Algorithm::Finnish),
    ("fr", Algorithm::French),
    ("hu", Algorithm::Hungarian),
    ("it", Algorithm::Italian),
    ("nl", Algorithm::Dutch),
    ("no", Algorithm::Norwegian),
    ("pt", Algorithm::Portuguese),
    ("ro", Algorithm::Romanian),
    ("ru", Algorithm::Russian),
    ("sv", Algorithm::Swedish),
    ("ta", Algorithm::Tamil),
    ("tr", Algorithm::Turkish),
];

/// Resolve a language code to its Snowball algorithm.
pub fn algorithm_for(language: &str) -> Option<Algorithm> {
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, algorithm)| *algorithm)
}

/// Language codes that have a stemmer.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(code, _)| *code)
}

/// Stemmer backed by the Snowball algorithms of `rust-stemmers`.
pub struct SnowballStemmer {
    language: String,
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Create the stemmer for `language`.
    ///
    /// Returns [`WordHashError::UnsupportedLanguage`] if there is no
    /// algorithm for the code.
    pub fn new(language: &str) -> Result<Self> {
        let algorithm =
            algorithm_for(language).ok_or_else(|| WordHashError::unsupported_language(language))?;

        Ok(SnowballStemmer {
            language: language.to_string(),
            stemmer: rust_stemmers::Stemmer::create(algorithm),
        })
    }

    /// The language code this stemmer was built for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

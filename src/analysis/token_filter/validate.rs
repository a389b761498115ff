//! Token validity rules.
//!
//! A token is counted when it contains a non-word character (a punctuation
//! fragment, only produced by the raw tokenizer), or when it is word-shaped
//! and is not a stopword, is longer than two characters, and is not
//! mixed-alphanumeric.
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::token_filter::validate::TokenValidator;
//!
//! let validator = TokenValidator::new("en");
//! assert!(validator.is_valid("cat"));
//! assert!(!validator.is_valid("the"));    // stopword
//! assert!(!validator.is_valid("ok"));     // too short
//! assert!(!validator.is_valid("3rd"));    // mixed alphanumeric
//! assert!(validator.is_valid("!"));       // punctuation fragment
//! ```

use std::borrow::Cow;

use crate::analysis::stopwords::StopwordTable;
use crate::analysis::token::{Token, TokenStream, has_non_word_char};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Word-shaped tokens must be longer than this many characters.
pub const MAX_SHORT_TOKEN_LEN: usize = 2;

/// Returns `true` for tokens that mix letters and digits in a
/// leading-character-determined way: a letter first and a digit anywhere, or
/// a digit first and a letter anywhere.
///
/// ```
/// use wordhash::analysis::token_filter::validate::is_mixed_alphanumeric;
///
/// assert!(is_mixed_alphanumeric("2nd"));
/// assert!(is_mixed_alphanumeric("abc123"));
/// assert!(!is_mixed_alphanumeric("2024"));
/// assert!(!is_mixed_alphanumeric("_a1"));
/// ```
pub fn is_mixed_alphanumeric(s: &str) -> bool {
    match s.chars().next() {
        Some(first) if first.is_alphabetic() => s.chars().any(|c| c.is_ascii_digit()),
        Some(first) if first.is_ascii_digit() => s.chars().any(char::is_alphabetic),
        _ => false,
    }
}

/// Decides whether a candidate token contributes to the frequency map.
#[derive(Clone, Debug)]
pub struct TokenValidator {
    stopwords: Cow<'static, StopwordTable>,
}

impl TokenValidator {
    /// Create a validator using the shared stopword table for `language`.
    ///
    /// Languages without a table validate against an empty stopword set.
    pub fn new(language: &str) -> Self {
        TokenValidator {
            stopwords: Cow::Borrowed(StopwordTable::for_language(language)),
        }
    }

    /// Create a validator with a custom stopword table.
    pub fn with_stopwords(stopwords: StopwordTable) -> Self {
        TokenValidator {
            stopwords: Cow::Owned(stopwords),
        }
    }

    /// The stopword table in use.
    pub fn stopwords(&self) -> &StopwordTable {
        &self.stopwords
    }

    /// Check a single (already lowercased) token.
    pub fn is_valid(&self, s: &str) -> bool {
        has_non_word_char(s) || self.is_valid_word(s)
    }

    fn is_valid_word(&self, s: &str) -> bool {
        !self.stopwords.contains(s)
            && s.chars().count() > MAX_SHORT_TOKEN_LEN
            && !is_mixed_alphanumeric(s)
    }
}

/// A filter that drops tokens failing [`TokenValidator::is_valid`].
#[derive(Clone, Debug)]
pub struct ValidateFilter {
    validator: TokenValidator,
}

impl ValidateFilter {
    /// Create a validate filter for `language`.
    pub fn new(language: &str) -> Self {
        Self::with_validator(TokenValidator::new(language))
    }

    /// Create a validate filter around an existing validator.
    pub fn with_validator(validator: TokenValidator) -> Self {
        ValidateFilter { validator }
    }

    /// Get the validator.
    pub fn validator(&self) -> &TokenValidator {
        &self.validator
    }
}

impl Filter for ValidateFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let valid: Vec<Token> = tokens
            .filter(|token| self.validator.is_valid(&token.text))
            .collect();

        Ok(Box::new(valid.into_iter()))
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

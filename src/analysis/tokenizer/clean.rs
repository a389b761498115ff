//! Clean-policy tokenizer.
//!
//! Punctuation symbols become spaces, apostrophes and hyphens are deleted,
//! anything else that is neither a word character nor whitespace is
//! removed, and the remainder is split on whitespace. Every token this
//! tokenizer emits is word-shaped.
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::tokenizer::Tokenizer;
//! use wordhash::analysis::tokenizer::clean::CleanTokenizer;
//!
//! let tokenizer = CleanTokenizer::new().unwrap();
//! let texts: Vec<String> = tokenizer
//!     .tokenize("It's a well-known {fact}!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["Its", "a", "wellknown", "fact"]);
//! ```

use super::Tokenizer;
use super::whitespace::WhitespaceTokenizer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Tokenizer that yields only word-shaped tokens.
#[derive(Debug)]
pub struct CleanTokenizer {
    punctuation: MappingCharFilter,
    non_word: PatternReplaceCharFilter,
}

impl CleanTokenizer {
    /// Create a new clean tokenizer.
    pub fn new() -> Result<Self> {
        Ok(CleanTokenizer {
            punctuation: MappingCharFilter::punctuation()?,
            non_word: PatternReplaceCharFilter::strip_non_word()?,
        })
    }

    /// Apply both cleaning passes without splitting.
    pub fn clean(&self, text: &str) -> String {
        self.non_word.filter(&self.punctuation.filter(text))
    }
}

impl Tokenizer for CleanTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let cleaned = self.clean(text);
        Ok(Box::new(WhitespaceTokenizer::split(&cleaned, 0).into_iter()))
    }

    fn name(&self) -> &'static str {
        "clean"
    }
}

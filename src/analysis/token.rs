//! Token types for text analysis.
//!
//! This module defines the units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single candidate token with text, position and offsets
//! - [`TokenType`] - Whether the token is word-shaped or a punctuation fragment
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::token::{Token, TokenType};
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert_eq!(token.token_type, TokenType::Word);
//!
//! let token = Token::with_offsets("!!", 1, 3, 5);
//! assert_eq!(token.token_type, TokenType::Punctuation);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches any character outside the word class (letters, marks, digits,
/// connector punctuation).
static NON_WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("Non-word pattern should be valid"));

/// Returns `true` if `text` contains at least one non-word character.
///
/// ```
/// use wordhash::analysis::token::has_non_word_char;
///
/// assert!(has_non_word_char("!!"));
/// assert!(has_non_word_char("a.b"));
/// assert!(!has_non_word_char("snake_case"));
/// assert!(!has_non_word_char("más"));
/// ```
pub fn has_non_word_char(text: &str) -> bool {
    NON_WORD_CHAR.is_match(text)
}

/// A token represents a single candidate unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the tokenized text
    pub start_offset: usize,

    /// The byte offset where this token ends in the tokenized text
    pub end_offset: usize,

    /// Shape of the token text
    pub token_type: TokenType,
}

/// Token shape classification.
///
/// The validator treats the two shapes differently: punctuation fragments
/// are always counted, word tokens go through the stopword, length and
/// mixed-alphanumeric checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters, digits and underscores only
    Word,
    /// Contains at least one non-word character
    Punctuation,
}

impl TokenType {
    /// Classify a piece of text.
    pub fn detect(text: &str) -> Self {
        if has_non_word_char(text) {
            TokenType::Punctuation
        } else {
            TokenType::Word
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        Token {
            token_type: TokenType::detect(&text),
            end_offset: text.len(),
            start_offset: 0,
            text,
            position,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        Token {
            token_type: TokenType::detect(&text),
            text,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Number of characters in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the token is a punctuation fragment.
    pub fn is_punctuation(&self) -> bool {
        self.token_type == TokenType::Punctuation
    }

    /// Replace the token text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Set the token position.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens produced by a tokenizer or filter.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

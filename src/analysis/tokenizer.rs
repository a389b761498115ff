//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline: they split a raw
//! document into candidate tokens.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`clean::CleanTokenizer`] - Strips punctuation, yields word-shaped tokens only
//! - [`raw::RawTokenizer`] - Keeps punctuation fragments as tokens alongside words
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::tokenizer::Tokenizer;
//! use wordhash::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve many
/// documents concurrently.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod clean;
pub mod raw;
pub mod whitespace;

pub use clean::CleanTokenizer;
pub use raw::RawTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Build the tokenizer for the given cleaning policy.
pub fn for_policy(clean_source: bool) -> Result<Box<dyn Tokenizer>> {
    if clean_source {
        Ok(Box::new(CleanTokenizer::new()?))
    } else {
        Ok(Box::new(RawTokenizer::new()?))
    }
}

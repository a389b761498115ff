//! Token filter implementations for token transformation.
//!
//! Filters run after tokenization, in order:
//!
//! ```text
//! tokens → LowercaseFilter → ValidateFilter → StemFilter → stems
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;
pub mod validate;

pub use lowercase::LowercaseFilter;
pub use stem::{IdentityStemmer, SnowballStemmer, StemFilter, Stemmer};
pub use validate::{TokenValidator, ValidateFilter};

//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Aggregator
//!             ↓
//!         Tokenizer (clean or raw)
//!             ↓
//!         LowercaseFilter
//!             ↓
//!         ValidateFilter
//!             ↓
//!         StemFilter
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordhash::analysis::analyzer::Analyzer;
//! use wordhash::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use wordhash::analysis::token_filter::lowercase::LowercaseFilter;
//! use wordhash::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()));
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can be shared
/// across threads hashing independent documents.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;

//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it is split into tokens. The
//! tokenizers in this crate compose them to implement their cleaning policy.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Literal string replacement
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::char_filter::CharFilter;
//! use wordhash::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::strip_non_word().unwrap();
//! assert_eq!(filter.filter("don't stop!"), "dont stop");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
pub mod pattern_replace;

pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;

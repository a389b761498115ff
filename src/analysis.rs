//! Text analysis for wordhash.
//!
//! This module turns raw text into validated, stemmed tokens: tokenization
//! under a clean or raw policy, lowercasing, validity filtering against
//! per-language stopword tables, and stemming.

pub mod analyzer;
pub mod char_filter;
pub mod stopwords;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

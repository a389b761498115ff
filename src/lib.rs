//! # wordhash
//!
//! The tokenization and normalization front-end of a statistical text
//! classifier: turns a raw document into a map from stemmed term to count.
//!
//! ## Features
//!
//! - Clean and raw tokenization policies
//! - Per-language stopword tables shared read-only across threads
//! - Length and mixed-alphanumeric noise rejection
//! - Snowball stemming, or any injected [`Stemmer`](analysis::token_filter::stem::Stemmer)
//! - Parallel hashing of independent documents
//!
//! ## Example
//!
//! ```
//! use wordhash::prelude::*;
//!
//! let map = word_hash("Running dogs run", &WordHashConfig::default()).unwrap();
//! assert_eq!(map.count("run"), 2);
//! assert_eq!(map.count("dog"), 1);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod term_frequency;
pub mod word_hash;

pub mod prelude {
    pub use crate::analysis::stopwords::StopwordTable;
    pub use crate::analysis::token_filter::stem::{IdentityStemmer, SnowballStemmer, Stemmer};
    pub use crate::config::WordHashConfig;
    pub use crate::error::{Result, WordHashError};
    pub use crate::term_frequency::TermFrequencyMap;
    pub use crate::word_hash::{WordHasher, word_hash};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

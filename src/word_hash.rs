//! Document to term-frequency conversion.
//!
//! A [`WordHasher`] binds one configuration to a tokenizer, the language's
//! stopword table and a stemmer, then turns documents into
//! [`TermFrequencyMap`]s:
//!
//! ```text
//! text → tokenizer → lowercase → validate → stem → TermFrequencyMap
//! ```
//!
//! # Examples
//!
//! ```
//! use wordhash::config::WordHashConfig;
//! use wordhash::word_hash::{WordHasher, word_hash};
//!
//! let map = word_hash("the cat and the dog", &WordHashConfig::default()).unwrap();
//! assert_eq!(map.count("cat"), 1);
//! assert_eq!(map.count("dog"), 1);
//! assert!(!map.contains("the"));
//!
//! // Reuse one hasher for many documents.
//! let hasher = WordHasher::new(WordHashConfig::default().with_clean_source(false)).unwrap();
//! let map = hasher.hash("wow!!").unwrap();
//! assert_eq!(map.count("!!"), 1);
//! ```

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::stopwords::StopwordTable;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{SnowballStemmer, StemFilter, Stemmer};
use crate::analysis::token_filter::validate::ValidateFilter;
use crate::analysis::tokenizer::{self, Tokenizer};
use crate::config::WordHashConfig;
use crate::error::Result;
use crate::term_frequency::TermFrequencyMap;

/// Converts documents into term-frequency maps under one configuration.
///
/// Construction resolves the stemmer, so an unsupported language fails here
/// and never while hashing. A hasher holds no per-document state and can be
/// shared across threads.
pub struct WordHasher {
    config: WordHashConfig,
    stemmer: Arc<dyn Stemmer>,
    validate: Arc<ValidateFilter>,
    analyzer: PipelineAnalyzer,
}

impl WordHasher {
    /// Create a hasher using the Snowball stemmer for the configured language.
    pub fn new(config: WordHashConfig) -> Result<Self> {
        config.validate()?;
        let stemmer = SnowballStemmer::new(&config.language())?;
        Self::with_stemmer(config, Arc::new(stemmer))
    }

    /// Create a hasher with an injected stemmer.
    ///
    /// The configured language still selects the stopword table.
    pub fn with_stemmer(config: WordHashConfig, stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        config.validate()?;
        let language = config.language();
        if StopwordTable::lookup(&language).is_none() {
            debug!("no stopword table for language {language:?}, stopword filtering disabled");
        }

        let tokenizer: Arc<dyn Tokenizer> =
            Arc::from(tokenizer::for_policy(config.clean_source)?);
        let validate = Arc::new(ValidateFilter::new(&language));
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::clone(&validate) as Arc<dyn Filter>)
            .add_filter(Arc::new(StemFilter::with_stemmer(Arc::clone(&stemmer))))
            .with_name(format!("word_hash_{language}"));

        debug!(
            "built word hasher: language={language}, clean_source={}, stemmer={}, stopwords={}",
            config.clean_source,
            stemmer.name(),
            validate.validator().stopwords().len()
        );

        Ok(WordHasher {
            config,
            stemmer,
            validate,
            analyzer,
        })
    }

    /// The configuration this hasher was built with.
    pub fn config(&self) -> &WordHashConfig {
        &self.config
    }

    /// The stemmer bound to this hasher.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// The stopword table in use (empty when the language has none).
    pub fn stopwords(&self) -> &StopwordTable {
        self.validate.validator().stopwords()
    }

    /// The underlying analysis pipeline.
    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }

    /// Build the term-frequency map of one document.
    pub fn hash(&self, text: &str) -> Result<TermFrequencyMap> {
        let map = TermFrequencyMap::from_tokens(self.analyzer.analyze(text)?);
        trace!(
            "hashed {} bytes into {} terms ({} occurrences)",
            text.len(),
            map.len(),
            map.total()
        );
        Ok(map)
    }

    /// Build the term-frequency maps of independent documents in parallel.
    ///
    /// The output is in input order.
    pub fn hash_all<S>(&self, documents: &[S]) -> Result<Vec<TermFrequencyMap>>
    where
        S: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|document| self.hash(document.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for WordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordHasher")
            .field("config", &self.config)
            .field("stemmer", &self.stemmer.name())
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

/// Build the term-frequency map of `text` under `config`.
///
/// Fails only when the configured language has no stemmer.
pub fn word_hash(text: &str, config: &WordHashConfig) -> Result<TermFrequencyMap> {
    WordHasher::new(config.clone())?.hash(text)
}

//! Term-frequency maps.
//!
//! A [`TermFrequencyMap`] maps each stemmed term of one document to the
//! number of times it occurred. Maps are built by folding a stream of
//! stemmed tokens ([`FromIterator`]) and are read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use wordhash::term_frequency::TermFrequencyMap;
//!
//! let map: TermFrequencyMap = ["cat", "dog", "cat"].into_iter().collect();
//! assert_eq!(map.count("cat"), 2);
//! assert_eq!(map.count("dog"), 1);
//! assert_eq!(map.count("bird"), 0);
//! assert_eq!(map.total(), 3);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;

/// Mapping from stemmed term to occurrence count.
///
/// Every count is at least one. Equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermFrequencyMap {
    terms: AHashMap<String, usize>,
}

impl TermFrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a stream of stemmed tokens into a map.
    pub(crate) fn from_tokens(tokens: TokenStream) -> Self {
        tokens.map(|token| token.text).collect()
    }

    fn increment(&mut self, term: String) {
        *self.terms.entry(term).or_insert(0) += 1;
    }

    /// The count for `term`, if present.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    /// The count for `term`, zero when absent.
    pub fn count(&self, term: &str) -> usize {
        self.get(term).unwrap_or(0)
    }

    /// Check if `term` is present.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the map has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.terms.values().sum()
    }

    /// Iterate over `(term, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.terms.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Iterate over the terms in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Consume the map, returning the underlying hash map.
    pub fn into_inner(self) -> AHashMap<String, usize> {
        self.terms
    }
}

impl<S: Into<String>> FromIterator<S> for TermFrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = TermFrequencyMap::new();
        for term in iter {
            map.increment(term.into());
        }
        map
    }
}

impl IntoIterator for TermFrequencyMap {
    type Item = (String, usize);
    type IntoIter = std::collections::hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_aggregation() {
        let map: TermFrequencyMap = vec!["run", "run", "cat", "run"].into_iter().collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("run"), Some(3));
        assert_eq!(map.get("cat"), Some(1));
        assert_eq!(map.get("dog"), None);
        assert_eq!(map.total(), 4);
        assert!(map.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn test_empty_map() {
        let map: TermFrequencyMap = Vec::<String>::new().into_iter().collect();
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
        assert_eq!(map, TermFrequencyMap::new());
    }

    #[test]
    fn test_order_independent_equality() {
        let a: TermFrequencyMap = ["x", "y", "x"].into_iter().collect();
        let b: TermFrequencyMap = ["y", "x", "x"].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_tokens() {
        let tokens = vec![Token::new("cat", 0), Token::new("!!", 1), Token::new("cat", 2)];
        let map = TermFrequencyMap::from_tokens(Box::new(tokens.into_iter()));

        assert_eq!(map.count("cat"), 2);
        assert_eq!(map.count("!!"), 1);
    }

    #[test]
    fn test_terms_and_into_iter() {
        let map: TermFrequencyMap = ["b", "a", "b"].into_iter().collect();

        let mut terms: Vec<&str> = map.terms().collect();
        terms.sort_unstable();
        assert_eq!(terms, vec!["a", "b"]);

        let mut pairs: Vec<(String, usize)> = map.clone().into_iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);

        assert_eq!(map.into_inner().len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let map: TermFrequencyMap = ["cat", "cat"].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"cat":2}"#);

        let parsed: TermFrequencyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}

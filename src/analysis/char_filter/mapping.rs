//! Literal replacement char filter backed by an Aho-Corasick automaton.

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{Result, WordHashError};

/// Symbols replaced by a single space under the clean policy.
pub const PUNCTUATION_TO_SPACE: &[char] = &[
    ',', '?', '.', '!', ';', ':', '"', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '=',
    '+', '[', ']', '{', '}', '|', '<', '>', '/', '`', '~',
];

/// Symbols deleted outright under the clean policy, so contractions and
/// hyphenated compounds collapse into one token.
pub const PUNCTUATION_TO_DELETE: &[char] = &['\'', '-'];

/// A char filter that replaces literal strings with fixed replacements.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Build a filter from `(pattern, replacement)` pairs.
    ///
    /// Overlapping patterns resolve to the leftmost longest match.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys: Vec<String> = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mapping {
            keys.push(k.into());
            replacements.push(v.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| WordHashError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// The clean-policy punctuation map.
    ///
    /// ```
    /// use wordhash::analysis::char_filter::CharFilter;
    /// use wordhash::analysis::char_filter::mapping::MappingCharFilter;
    ///
    /// let filter = MappingCharFilter::punctuation().unwrap();
    /// assert_eq!(filter.filter("Hello (greeting's), {braces}"), "Hello  greetings    braces ");
    /// ```
    pub fn punctuation() -> Result<Self> {
        let spaced = PUNCTUATION_TO_SPACE.iter().map(|c| (c.to_string(), " "));
        let deleted = PUNCTUATION_TO_DELETE.iter().map(|c| (c.to_string(), ""));
        Self::new(spaced.chain(deleted))
    }

    /// Number of patterns in this filter.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Check if the filter has no patterns.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl std::fmt::Debug for MappingCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingCharFilter")
            .field("patterns", &self.replacements.len())
            .finish()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let filter = MappingCharFilter::new(vec![("ph", "f"), ("qu", "k")]).unwrap();
        assert_eq!(filter.filter("phone queue"), "fone keue");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_mapping_overlap() {
        let filter = MappingCharFilter::new(vec![("ab", "1"), ("abc", "2")]).unwrap();

        // "abc" should match "abc" -> "2" (longest match)
        assert_eq!(filter.filter("abc"), "2");
    }

    #[test]
    fn test_mapping_multibyte() {
        let filter = MappingCharFilter::new(vec![("壱", "1")]).unwrap();
        assert_eq!(filter.filter("第壱位"), "第1位");
    }

    #[test]
    fn test_punctuation_spaces_symbols() {
        let filter = MappingCharFilter::punctuation().unwrap();
        assert_eq!(filter.filter("a,b?c.d!e"), "a b c d e");
        assert_eq!(filter.filter("snake_case"), "snake case");
        assert_eq!(filter.filter("x|y<z>"), "x y z ");
    }

    #[test]
    fn test_punctuation_deletes_apostrophes_and_hyphens() {
        let filter = MappingCharFilter::punctuation().unwrap();
        assert_eq!(filter.filter("don't"), "dont");
        assert_eq!(filter.filter("well-known"), "wellknown");
    }

    #[test]
    fn test_punctuation_leaves_other_symbols() {
        let filter = MappingCharFilter::punctuation().unwrap();
        // Backslash and non-ASCII symbols are left for the non-word strip.
        assert_eq!(filter.filter("a\\b"), "a\\b");
        assert_eq!(filter.filter("50€"), "50€");
    }
}

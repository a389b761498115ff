//! Raw-policy tokenizer.
//!
//! Produces two streams over the same text and concatenates them: first the
//! word-shaped tokens (non-word, non-whitespace characters deleted), then the
//! punctuation fragments (word characters blanked out). Punctuation fragments
//! are first-class tokens and are counted by the validator without further
//! checks.
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::tokenizer::Tokenizer;
//! use wordhash::analysis::tokenizer::raw::RawTokenizer;
//!
//! let tokenizer = RawTokenizer::new().unwrap();
//! let texts: Vec<String> = tokenizer.tokenize("wow!!").unwrap().map(|t| t.text).collect();
//! assert_eq!(texts, vec!["wow", "!!"]);
//! ```

use super::Tokenizer;
use super::whitespace::WhitespaceTokenizer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Tokenizer that keeps punctuation fragments alongside words.
#[derive(Clone, Debug)]
pub struct RawTokenizer {
    non_word: PatternReplaceCharFilter,
    words: PatternReplaceCharFilter,
}

impl RawTokenizer {
    /// Create a new raw tokenizer.
    pub fn new() -> Result<Self> {
        Ok(RawTokenizer {
            non_word: PatternReplaceCharFilter::strip_non_word()?,
            words: PatternReplaceCharFilter::blank_words()?,
        })
    }
}

impl Tokenizer for RawTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = WhitespaceTokenizer::split(&self.non_word.filter(text), 0);
        let punctuation = WhitespaceTokenizer::split(&self.words.filter(text), tokens.len());
        tokens.extend(punctuation);

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "raw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenType};

    fn tokens(text: &str) -> Vec<Token> {
        RawTokenizer::new().unwrap().tokenize(text).unwrap().collect()
    }

    fn texts(text: &str) -> Vec<String> {
        tokens(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_then_punctuation() {
        assert_eq!(
            texts("Hello, world... it's me!"),
            vec!["Hello", "world", "its", "me", ",", "...", "'", "!"]
        );
    }

    #[test]
    fn test_punctuation_fragments_are_typed() {
        let tokens = tokens("wow!! ok");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token_type, TokenType::Word);
        assert_eq!(tokens[1].token_type, TokenType::Word);
        assert_eq!(tokens[2].text, "!!");
        assert_eq!(tokens[2].token_type, TokenType::Punctuation);
    }

    #[test]
    fn test_underscores_stay_in_words() {
        assert_eq!(texts("snake_case"), vec!["snake_case"]);
    }

    #[test]
    fn test_hyphen_and_apostrophe_fragments() {
        assert_eq!(texts("e-mail don't"), vec!["email", "dont", "-", "'"]);
    }

    #[test]
    fn test_positions_continue_across_streams() {
        let positions: Vec<usize> = tokens("a! b?").iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_blank_input() {
        assert!(texts("").is_empty());
        assert!(texts(" \t\n").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RawTokenizer::new().unwrap().name(), "raw");
    }
}

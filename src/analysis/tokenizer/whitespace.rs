//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split `text` on whitespace, numbering tokens from `first_position`.
    pub(crate) fn split(text: &str, first_position: usize) -> Vec<Token> {
        let base = text.as_ptr() as usize;
        text.split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                // `word` borrows from `text`, so the pointer difference is its byte offset.
                let start_offset = word.as_ptr() as usize - base;
                Token::with_offsets(
                    word,
                    first_position + i,
                    start_offset,
                    start_offset + word.len(),
                )
            })
            .collect()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(Self::split(text, 0).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokens = WhitespaceTokenizer::split("  héllo wörld", 5);

        assert_eq!(tokens[0].position, 5);
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 8);
        assert_eq!(tokens[1].position, 6);
        assert_eq!(tokens[1].start_offset, 9);
        assert_eq!(tokens[1].end_offset, 15);
    }

    #[test]
    fn test_token_types() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new()
            .tokenize("wow !!")
            .unwrap()
            .collect();
        assert_eq!(tokens[0].token_type, TokenType::Word);
        assert_eq!(tokens[1].token_type, TokenType::Punctuation);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" \n\t ").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}

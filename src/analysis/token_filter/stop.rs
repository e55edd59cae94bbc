//! Stop filter implementation.
//!
//! Removes common words (stop words) from the token stream. The default
//! vectorizer configuration carries no stop words (mirroring the trained
//! artifacts this crate consumes), but artifacts may ship a custom list,
//! which must be applied identically at inference time.
//!
//! # Examples
//!
//! ```
//! use chaff::analysis::token_filter::Filter;
//! use chaff::analysis::token_filter::stop::StopFilter;
//! use chaff::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during analysis.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Check whether a word is in this filter's stop list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words in this filter.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check whether this filter has no stop words.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered_tokens: Vec<_> = tokens
            .filter(|token| !stop_words.contains(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter_default_words() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("this", 0),
            Token::new("is", 1),
            Token::new("test", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "test");
    }

    #[test]
    fn test_stop_filter_custom_words() {
        let filter = StopFilter::from_words(vec!["free", "win"]);
        let tokens = vec![
            Token::new("free", 0),
            Token::new("voucher", 1),
            Token::new("win", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "voucher");
    }

    #[test]
    fn test_stop_filter_is_stop_word() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("voucher"));
    }

    #[test]
    fn test_stop_filter_case_sensitive() {
        // Stop filtering happens after lowercasing in the standard pipeline;
        // the filter itself matches exactly.
        let filter = StopFilter::from_words(vec!["the"]);
        let tokens = vec![Token::new("The", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}

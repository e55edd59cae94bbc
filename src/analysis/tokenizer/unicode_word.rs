//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29), which handles
//! international text better than a `\w+` regex. Non-word segments like
//! punctuation and whitespace are filtered out.
//!
//! # Examples
//!
//! ```
//! use chaff::analysis::tokenizer::Tokenizer;
//! use chaff::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("café résumé").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "café");
//! assert_eq!(tokens[1].text, "résumé");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) to identify word
/// boundaries, keeping only word segments.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (offset, word))| {
                Token::with_offsets(word, position, offset, offset + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

//! Lowercase filter implementation.
//!
//! Converts all token text to lowercase so that "FREE" and "free" map to the
//! same vocabulary column.
//!
//! # Examples
//!
//! ```
//! use chaff::analysis::token_filter::Filter;
//! use chaff::analysis::token_filter::lowercase::LowercaseFilter;
//! use chaff::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (Unicode-aware)
/// - Skips tokens marked as stopped
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let lowered = token.text.to_lowercase();
                    token.with_text(lowered)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

//! Core analyzer trait definition.
//!
//! An analyzer is the complete text processing pipeline: tokenization followed
//! by a chain of token filters. The vectorizer consumes analyzers through this
//! trait only, so the pipeline that built the vocabulary can be reproduced
//! exactly at inference time from serialized configuration.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so a single analyzer can serve concurrent
/// classification calls.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaff::analysis::analyzer::Analyzer;
    /// use chaff::analysis::config::TokenizerConfig;
    ///
    /// let analyzer = TokenizerConfig::default().build_analyzer().unwrap();
    /// let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
    ///
    /// assert_eq!(tokens[0].text, "hello");
    /// assert_eq!(tokens[1].text, "world");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

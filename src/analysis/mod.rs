//! Text analysis pipeline: tokenizers, token filters, and analyzers.
//!
//! Analysis converts a raw message into the token stream the vectorizer
//! counts. The pipeline applied at inference time must be byte-for-byte
//! identical to the one used when the vocabulary was built, so analyzers are
//! constructed from a serializable [`TokenizerConfig`](config::TokenizerConfig)
//! carried inside the vectorizer artifact rather than assembled ad hoc.

pub mod analyzer;
pub mod config;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use config::{TokenizerConfig, TokenizerKind};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};

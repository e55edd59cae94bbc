//! Serializable tokenizer configuration.
//!
//! The vocabulary indices a trained vectorizer carries are only meaningful
//! under the exact tokenization that produced them, so the configuration is
//! stored inside the vectorizer artifact and analyzers are built from it
//! rather than assembled by hand. A tokenizer assembled any other way can
//! silently diverge from training and degrade accuracy without ever raising
//! an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::error::Result;

/// The tokenizer family a pipeline is built around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Regex match tokenizer; the pattern comes from `token_pattern`.
    Regex,
    /// Unicode word boundary tokenizer (UAX #29).
    UnicodeWord,
    /// Whitespace-split tokenizer.
    Whitespace,
}

/// Complete, serializable description of an analysis pipeline.
///
/// Stored in the vectorizer artifact; [`build_analyzer`](Self::build_analyzer)
/// is the only constructor for inference-time analyzers.
///
/// # Examples
///
/// ```
/// use chaff::analysis::analyzer::Analyzer;
/// use chaff::analysis::config::TokenizerConfig;
///
/// let config = TokenizerConfig::default();
/// let analyzer = config.build_analyzer().unwrap();
/// let tokens: Vec<_> = analyzer.analyze("FREE entry!").unwrap().collect();
///
/// assert_eq!(tokens[0].text, "free");
/// assert_eq!(tokens[1].text, "entry");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Which tokenizer family to use.
    pub kind: TokenizerKind,
    /// Token pattern for the regex tokenizer; ignored by the other kinds.
    pub token_pattern: String,
    /// Whether tokens are lowercased before counting.
    pub lowercase: bool,
    /// Stop words removed after lowercasing; empty means none.
    pub stop_words: Vec<String>,
}

impl Default for TokenizerConfig {
    /// Defaults matching a stock scikit-learn `TfidfVectorizer`: regex `\w+`
    /// tokens, lowercased, no stop words.
    fn default() -> Self {
        TokenizerConfig {
            kind: TokenizerKind::Regex,
            token_pattern: r"\w+".to_string(),
            lowercase: true,
            stop_words: Vec::new(),
        }
    }
}

impl TokenizerConfig {
    /// Build the analyzer this configuration describes.
    ///
    /// Fails if the token pattern is not a valid regex.
    pub fn build_analyzer(&self) -> Result<PipelineAnalyzer> {
        let tokenizer: Arc<dyn Tokenizer> = match self.kind {
            TokenizerKind::Regex => Arc::new(RegexTokenizer::with_pattern(&self.token_pattern)?),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        };

        let mut analyzer = PipelineAnalyzer::new(tokenizer);

        if self.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }

        if !self.stop_words.is_empty() {
            analyzer =
                analyzer.add_filter(Arc::new(StopFilter::from_words(self.stop_words.clone())));
        }

        Ok(analyzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::Token;

    #[test]
    fn test_default_config_lowercases() {
        let analyzer = TokenizerConfig::default().build_analyzer().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("URGENT Free WIN").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["urgent", "free", "win"]);
    }

    #[test]
    fn test_config_without_lowercase() {
        let config = TokenizerConfig {
            lowercase: false,
            ..TokenizerConfig::default()
        };
        let analyzer = config.build_analyzer().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("Hello").unwrap().collect();

        assert_eq!(tokens[0].text, "Hello");
    }

    #[test]
    fn test_config_with_stop_words() {
        let config = TokenizerConfig {
            stop_words: vec!["to".to_string(), "a".to_string()],
            ..TokenizerConfig::default()
        };
        let analyzer = config.build_analyzer().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("Text WIN to 80580").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["text", "win", "80580"]);
    }

    #[test]
    fn test_config_unicode_word_kind() {
        let config = TokenizerConfig {
            kind: TokenizerKind::UnicodeWord,
            ..TokenizerConfig::default()
        };
        let analyzer = config.build_analyzer().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("You've won").unwrap().collect();

        assert_eq!(tokens[0].text, "you've");
    }

    #[test]
    fn test_config_invalid_pattern() {
        let config = TokenizerConfig {
            token_pattern: "(unclosed".to_string(),
            ..TokenizerConfig::default()
        };
        assert!(config.build_analyzer().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = TokenizerConfig {
            kind: TokenizerKind::Regex,
            token_pattern: r"[a-z]+".to_string(),
            lowercase: true,
            stop_words: vec!["the".to_string()],
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: TokenizerConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}

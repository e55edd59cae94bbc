//! Superficial lexical statistics for a message.
//!
//! These are the surface signals shown alongside a classification (length,
//! uppercase ratio, URL/digit presence). They are reported to the caller,
//! not fed into the model.

use serde::{Deserialize, Serialize};

/// Lexical statistics computed from a raw message.
///
/// # Examples
///
/// ```
/// use chaff::stats::MessageStats;
///
/// let stats = MessageStats::from_text("Visit www.example.com NOW!!");
/// assert!(stats.has_url);
/// assert_eq!(stats.exclamation_count, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageStats {
    /// Number of characters in the message.
    pub char_count: usize,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Whether the message mentions "http" or "www" (case-insensitive).
    pub has_url: bool,
    /// Whether the message contains any digit.
    pub has_digits: bool,
    /// Fraction of characters that are uppercase, in `[0, 1]`.
    pub uppercase_ratio: f64,
    /// Number of exclamation marks.
    pub exclamation_count: usize,
}

impl MessageStats {
    /// Compute statistics for a message. Pure and infallible.
    pub fn from_text(text: &str) -> Self {
        let char_count = text.chars().count();
        let word_count = text.split_whitespace().count();

        let lowered = text.to_lowercase();
        let has_url = lowered.contains("http") || lowered.contains("www");
        let has_digits = text.chars().any(|c| c.is_numeric());

        let uppercase = text.chars().filter(|c| c.is_uppercase()).count();
        let uppercase_ratio = uppercase as f64 / char_count.max(1) as f64;

        let exclamation_count = text.chars().filter(|&c| c == '!').count();

        MessageStats {
            char_count,
            word_count,
            has_url,
            has_digits,
            uppercase_ratio,
            exclamation_count,
        }
    }
}

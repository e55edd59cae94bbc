//! # chaff
//!
//! TF-IDF spam filtering for short text messages.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Configurable text analysis pipeline (tokenizers + token filters)
//! - TF-IDF vectorization over a fixed, trained vocabulary
//! - Binary logistic classification with calibrated probabilities
//! - Versioned JSON artifacts with fail-fast validation
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chaff::engine::ClassifierEngine;
//!
//! # fn main() -> chaff::error::Result<()> {
//! let engine = ClassifierEngine::load(
//!     Path::new("vectorizer.json"),
//!     Path::new("model.json"),
//! )?;
//!
//! let prediction = engine.classify("URGENT: You've WON a FREE prize!")?;
//! println!("{} ({:.1}%)", prediction.label, prediction.confidence() * 100.0);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod artifact;
pub mod classify;
pub mod cli;
pub mod engine;
pub mod error;
pub mod stats;
pub mod vectorize;

pub mod prelude {
    pub use crate::analysis::config::{TokenizerConfig, TokenizerKind};
    pub use crate::artifact::{ModelArtifact, VectorizerArtifact};
    pub use crate::classify::LogisticModel;
    pub use crate::engine::{ClassifierEngine, Prediction};
    pub use crate::error::{ChaffError, Result};
    pub use crate::stats::MessageStats;
    pub use crate::vectorize::TfIdfVectorizer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for the chaff library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ChaffError`] enum. Artifact loading distinguishes a missing file from a
//! file that exists but fails schema or version validation, and a vectorizer
//! whose dimension disagrees with the model it is paired with.
//!
//! # Examples
//!
//! ```
//! use chaff::error::{ChaffError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ChaffError::analysis("Invalid token pattern"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for chaff operations.
#[derive(Error, Debug)]
pub enum ChaffError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// An artifact file does not exist at the given path.
    #[error("Artifact not found: {path}")]
    ArtifactNotFound { path: String },

    /// An artifact file exists but fails parsing, schema, or version validation.
    #[error("Artifact corrupt: {path}: {reason}")]
    ArtifactCorrupt { path: String, reason: String },

    /// Vectorizer and model artifacts disagree on the feature dimension.
    #[error("Dimension mismatch: vectorizer has {vectorizer} columns but model expects {model}")]
    DimensionMismatch { vectorizer: usize, model: usize },

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ChaffError.
pub type Result<T> = std::result::Result<T, ChaffError>;

impl ChaffError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ChaffError::Analysis(msg.into())
    }

    /// Create a new artifact-not-found error.
    pub fn artifact_not_found<S: Into<String>>(path: S) -> Self {
        ChaffError::ArtifactNotFound { path: path.into() }
    }

    /// Create a new artifact-corrupt error.
    pub fn artifact_corrupt<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        ChaffError::ArtifactCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new dimension-mismatch error.
    pub fn dimension_mismatch(vectorizer: usize, model: usize) -> Self {
        ChaffError::DimensionMismatch { vectorizer, model }
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        ChaffError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ChaffError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ChaffError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = ChaffError::artifact_not_found("/tmp/missing.json");
        assert_eq!(error.to_string(), "Artifact not found: /tmp/missing.json");

        let error = ChaffError::artifact_corrupt("/tmp/bad.json", "unsupported schema version 9");
        assert_eq!(
            error.to_string(),
            "Artifact corrupt: /tmp/bad.json: unsupported schema version 9"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = ChaffError::dimension_mismatch(100, 50);
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: vectorizer has 100 columns but model expects 50"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let chaff_error = ChaffError::from(io_error);

        match chaff_error {
            ChaffError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}

//! Vectorizer artifact: vocabulary, IDF weights, and tokenizer configuration.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::config::TokenizerConfig;
use crate::artifact::{self, SCHEMA_VERSION};
use crate::error::{ChaffError, Result};
use crate::vectorize::tfidf::TfIdfVectorizer;
use crate::vectorize::vocabulary::Vocabulary;

/// Serialized form of a fitted [`TfIdfVectorizer`].
///
/// The tokenizer configuration travels with the vocabulary because the
/// vocabulary's column indices are only meaningful under that exact
/// tokenization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Artifact layout version.
    pub schema_version: u32,
    /// When the vectorizer was fitted.
    pub created_at: DateTime<Utc>,
    /// The analysis pipeline the vocabulary was built under.
    pub tokenizer: TokenizerConfig,
    /// Token -> column index mapping.
    pub vocabulary: HashMap<String, usize>,
    /// Smoothed IDF weight per column.
    pub idf: Vec<f64>,
    /// Training corpus size.
    pub n_documents: usize,
}

impl VectorizerArtifact {
    /// Capture a fitted vectorizer as a serializable artifact.
    pub fn from_vectorizer(vectorizer: &TfIdfVectorizer) -> Self {
        VectorizerArtifact {
            schema_version: SCHEMA_VERSION,
            created_at: Utc::now(),
            tokenizer: vectorizer.config().clone(),
            vocabulary: vectorizer
                .vocabulary()
                .iter()
                .map(|(token, index)| (token.to_string(), index))
                .collect(),
            idf: vectorizer.idf().to_vec(),
            n_documents: vectorizer.n_documents(),
        }
    }

    /// Load and fully validate a vectorizer artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let artifact: VectorizerArtifact = artifact::read_artifact(path)?;
        artifact
            .validate()
            .map_err(|e| ChaffError::artifact_corrupt(path.display().to_string(), e.to_string()))?;

        log::info!(
            "loaded vectorizer artifact from {}: {} columns, fitted on {} documents",
            path.display(),
            artifact.vocabulary.len(),
            artifact.n_documents
        );
        Ok(artifact)
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        artifact::write_artifact(self, path)
    }

    /// Reconstruct the vectorizer this artifact describes.
    pub fn build(&self) -> Result<TfIdfVectorizer> {
        let vocabulary = Vocabulary::from_entries(
            self.vocabulary
                .iter()
                .map(|(token, &index)| (token.clone(), index)),
        )?;

        TfIdfVectorizer::from_parts(
            self.tokenizer.clone(),
            vocabulary,
            self.idf.clone(),
            self.n_documents,
        )
    }

    /// The feature dimension V this artifact carries.
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ChaffError::invalid_operation(format!(
                "unsupported schema version {} (expected {SCHEMA_VERSION})",
                self.schema_version
            )));
        }

        // Exercises vocabulary density, IDF shape, and the token pattern.
        self.build()?;
        Ok(())
    }
}

//! Model artifact: linear weights, bias, label order, and decision threshold.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::artifact::{self, SCHEMA_VERSION};
use crate::classify::linear::LogisticModel;
use crate::error::{ChaffError, Result};

/// Serialized form of a trained [`LogisticModel`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact layout version.
    pub schema_version: u32,
    /// When the model was trained.
    pub created_at: DateTime<Utc>,
    /// Linear coefficients, one per vectorizer column.
    pub weights: Vec<f64>,
    /// Intercept term.
    pub bias: f64,
    /// Class labels as `[negative, positive]`; the order of
    /// `predict_proba` columns.
    pub labels: [String; 2],
    /// Probability cutoff for the positive class.
    pub threshold: f64,
}

impl ModelArtifact {
    /// Capture a model as a serializable artifact.
    pub fn from_model(model: &LogisticModel) -> Self {
        ModelArtifact {
            schema_version: SCHEMA_VERSION,
            created_at: Utc::now(),
            weights: model.weights().to_vec(),
            bias: model.bias(),
            labels: model.labels().clone(),
            threshold: model.threshold(),
        }
    }

    /// Load and fully validate a model artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let artifact: ModelArtifact = artifact::read_artifact(path)?;
        artifact
            .validate()
            .map_err(|e| ChaffError::artifact_corrupt(path.display().to_string(), e.to_string()))?;

        log::info!(
            "loaded model artifact from {}: {} columns, labels [{}, {}], threshold {}",
            path.display(),
            artifact.weights.len(),
            artifact.labels[0],
            artifact.labels[1],
            artifact.threshold
        );
        Ok(artifact)
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        artifact::write_artifact(self, path)
    }

    /// Reconstruct the model this artifact describes.
    pub fn build(&self) -> Result<LogisticModel> {
        LogisticModel::new(
            self.weights.clone(),
            self.bias,
            self.labels.clone(),
            self.threshold,
        )
    }

    /// The feature dimension this model expects.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ChaffError::invalid_operation(format!(
                "unsupported schema version {} (expected {SCHEMA_VERSION})",
                self.schema_version
            )));
        }

        // Exercises weight, label, and threshold validation.
        self.build()?;
        Ok(())
    }
}

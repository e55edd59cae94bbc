//! Serialized artifact contract: the trained state the pipeline loads at startup.
//!
//! Two artifacts form a matched pair: the vectorizer artifact (tokenizer
//! configuration, vocabulary, IDF weights) and the model artifact (linear
//! weights, bias, label order, decision threshold). Both are versioned,
//! pretty-printed JSON. Loading validates the schema eagerly so a corrupt or
//! incompatible artifact aborts startup instead of misclassifying quietly.
//!
//! Failure taxonomy at load time:
//!
//! - missing file -> [`ChaffError::ArtifactNotFound`](crate::error::ChaffError)
//! - unparseable JSON, wrong schema version, or failed field validation ->
//!   [`ChaffError::ArtifactCorrupt`](crate::error::ChaffError)
//! - a pair whose dimensions disagree ->
//!   [`ChaffError::DimensionMismatch`](crate::error::ChaffError) (checked at
//!   engine construction)

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ChaffError, Result};

pub mod model;
pub mod vectorizer;

pub use model::ModelArtifact;
pub use vectorizer::VectorizerArtifact;

/// Current artifact schema version. Bump on any incompatible layout change.
pub const SCHEMA_VERSION: u32 = 1;

/// Read and parse an artifact file, mapping failures to the load taxonomy.
pub(crate) fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ChaffError::artifact_not_found(path.display().to_string())
        } else {
            ChaffError::Io(e)
        }
    })?;

    serde_json::from_str(&content)
        .map_err(|e| ChaffError::artifact_corrupt(path.display().to_string(), e.to_string()))
}

/// Serialize an artifact to pretty-printed JSON on disk.
pub(crate) fn write_artifact<T: Serialize>(artifact: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(artifact)?;
    fs::write(path, json)?;
    Ok(())
}

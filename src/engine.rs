//! Classification engine: the stateless service object over a loaded
//! artifact pair.
//!
//! A [`ClassifierEngine`] is constructed once from a matched vectorizer and
//! model, then shared read-only by any number of concurrent callers; each
//! [`classify`](ClassifierEngine::classify) call is a pure function of the
//! loaded state and the input string.
//!
//! # Examples
//!
//! ```
//! use chaff::analysis::config::TokenizerConfig;
//! use chaff::classify::LogisticModel;
//! use chaff::engine::ClassifierEngine;
//! use chaff::vectorize::TfIdfVectorizer;
//!
//! let corpus = vec![
//!     "free prize win now".to_string(),
//!     "meeting at three tomorrow".to_string(),
//! ];
//! let vectorizer = TfIdfVectorizer::fit(TokenizerConfig::default(), &corpus, 1).unwrap();
//! let weights = vec![0.0; vectorizer.dimension()];
//! let model = LogisticModel::new(
//!     weights,
//!     -1.0,
//!     ["ham".to_string(), "spam".to_string()],
//!     0.5,
//! )
//! .unwrap();
//!
//! let engine = ClassifierEngine::new(vectorizer, model).unwrap();
//! let prediction = engine.classify("free prize").unwrap();
//! assert_eq!(prediction.label, "ham"); // all-zero weights: bias decides
//! ```

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::artifact::{ModelArtifact, VectorizerArtifact};
use crate::classify::linear::LogisticModel;
use crate::error::{ChaffError, Result};
use crate::vectorize::tfidf::TfIdfVectorizer;

/// Probability assigned to one class label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelProbability {
    /// The class label.
    pub label: String,
    /// Probability in `[0, 1]`.
    pub probability: f64,
}

/// The result of classifying one message.
///
/// `probabilities` is ordered exactly as the model artifact orders its
/// labels (`[negative, positive]`); the entries sum to 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted class label.
    pub label: String,
    /// Per-class probabilities in artifact label order.
    pub probabilities: Vec<LabelProbability>,
}

impl Prediction {
    /// Look up the probability of a specific label.
    pub fn probability(&self, label: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.probability)
    }

    /// Probability of the predicted label (the reported confidence).
    pub fn confidence(&self) -> f64 {
        self.probability(&self.label).unwrap_or(0.0)
    }
}

/// Stateless classification service over a matched artifact pair.
///
/// All state is immutable after construction; the engine is `Send + Sync`
/// and requires no locking for concurrent use.
#[derive(Debug)]
pub struct ClassifierEngine {
    vectorizer: TfIdfVectorizer,
    model: LogisticModel,
}

impl ClassifierEngine {
    /// Create an engine from an already-built vectorizer and model.
    ///
    /// Fails with `DimensionMismatch` if the vectorizer's vocabulary size
    /// differs from the model's weight dimension. Vectors are never padded
    /// or truncated to compensate.
    pub fn new(vectorizer: TfIdfVectorizer, model: LogisticModel) -> Result<Self> {
        if vectorizer.dimension() != model.dimension() {
            return Err(ChaffError::dimension_mismatch(
                vectorizer.dimension(),
                model.dimension(),
            ));
        }

        Ok(ClassifierEngine { vectorizer, model })
    }

    /// Create an engine from a loaded artifact pair.
    pub fn from_artifacts(
        vectorizer: &VectorizerArtifact,
        model: &ModelArtifact,
    ) -> Result<Self> {
        Self::new(vectorizer.build()?, model.build()?)
    }

    /// Load both artifacts from disk and build the engine.
    ///
    /// This is the one-time blocking load; complete it before serving
    /// requests. Any failure here is fatal to startup.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self> {
        let vectorizer = VectorizerArtifact::load(vectorizer_path)?;
        let model = ModelArtifact::load(model_path)?;
        let engine = Self::from_artifacts(&vectorizer, &model)?;

        log::info!(
            "classifier engine ready: {} feature columns, labels [{}, {}]",
            engine.dimension(),
            engine.labels()[0],
            engine.labels()[1]
        );
        Ok(engine)
    }

    /// Classify one message.
    ///
    /// Never fails for well-formed text: empty or fully out-of-vocabulary
    /// input produces the zero vector, whose prediction is driven by the
    /// model's bias term alone.
    pub fn classify(&self, text: &str) -> Result<Prediction> {
        let features = self.vectorizer.transform(text)?;
        let probabilities = self.model.predict_proba(&features);
        let labels = self.model.labels();

        Ok(Prediction {
            label: self.model.predict(&features).to_string(),
            probabilities: vec![
                LabelProbability {
                    label: labels[0].clone(),
                    probability: probabilities[0],
                },
                LabelProbability {
                    label: labels[1].clone(),
                    probability: probabilities[1],
                },
            ],
        })
    }

    /// Classify a batch of independent messages in parallel.
    pub fn classify_batch(&self, texts: &[&str]) -> Result<Vec<Prediction>> {
        texts.par_iter().map(|text| self.classify(text)).collect()
    }

    /// The feature dimension of the loaded pair.
    pub fn dimension(&self) -> usize {
        self.model.dimension()
    }

    /// Class labels as `[negative, positive]`.
    pub fn labels(&self) -> &[String; 2] {
        self.model.labels()
    }

    /// The decision threshold in effect.
    pub fn threshold(&self) -> f64 {
        self.model.threshold()
    }

    /// The vectorizer half of the pair.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::TokenizerConfig;

    fn engine() -> ClassifierEngine {
        let corpus = vec![
            "free prize win now".to_string(),
            "win a free voucher".to_string(),
            "meeting at three tomorrow".to_string(),
            "pick up milk tomorrow".to_string(),
        ];
        let vectorizer = TfIdfVectorizer::fit(TokenizerConfig::default(), &corpus, 1).unwrap();

        // Spam-indicative columns get positive weight, the rest negative.
        let spam_tokens = ["free", "prize", "win", "voucher", "now"];
        let weights: Vec<f64> = vectorizer
            .vocabulary()
            .tokens_by_index()
            .iter()
            .map(|token| if spam_tokens.contains(token) { 3.0 } else { -2.0 })
            .collect();

        let model = LogisticModel::new(
            weights,
            -0.5,
            ["ham".to_string(), "spam".to_string()],
            0.5,
        )
        .unwrap();

        ClassifierEngine::new(vectorizer, model).unwrap()
    }

    #[test]
    fn test_engine_classifies_spam_and_ham() {
        let engine = engine();

        let spam = engine.classify("WIN a FREE prize now").unwrap();
        assert_eq!(spam.label, "spam");
        assert!(spam.probability("spam").unwrap() > 0.5);

        let ham = engine.classify("meeting tomorrow").unwrap();
        assert_eq!(ham.label, "ham");
        assert!(ham.probability("ham").unwrap() > 0.5);
    }

    #[test]
    fn test_engine_probabilities_sum_to_one() {
        let engine = engine();
        let prediction = engine.classify("free meeting tomorrow").unwrap();

        let total: f64 = prediction.probabilities.iter().map(|e| e.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_engine_empty_input_is_bias_driven() {
        let engine = engine();
        let prediction = engine.classify("").unwrap();

        // Negative bias favors the negative class on the zero vector.
        assert_eq!(prediction.label, "ham");
        let total: f64 = prediction.probabilities.iter().map(|e| e.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_engine_rejects_mismatched_pair() {
        let corpus = vec!["free prize".to_string()];
        let vectorizer = TfIdfVectorizer::fit(TokenizerConfig::default(), &corpus, 1).unwrap();
        let model = LogisticModel::new(
            vec![1.0; vectorizer.dimension() + 3],
            0.0,
            ["ham".to_string(), "spam".to_string()],
            0.5,
        )
        .unwrap();

        match ClassifierEngine::new(vectorizer, model) {
            Err(ChaffError::DimensionMismatch { vectorizer, model }) => {
                assert_eq!(model, vectorizer + 3);
            }
            other => panic!("Expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_engine_batch_matches_single() {
        let engine = engine();
        let messages = ["free prize", "meeting tomorrow", ""];

        let batch = engine.classify_batch(&messages).unwrap();
        assert_eq!(batch.len(), 3);

        for (message, prediction) in messages.iter().zip(&batch) {
            assert_eq!(*prediction, engine.classify(message).unwrap());
        }
    }

    #[test]
    fn test_prediction_confidence() {
        let engine = engine();
        let prediction = engine.classify("free prize win").unwrap();

        assert!((prediction.confidence() - prediction.probability("spam").unwrap()).abs() < 1e-12);
    }
}

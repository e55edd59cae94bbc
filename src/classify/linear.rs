//! Binary logistic model inference.
//!
//! A [`LogisticModel`] scores a feature vector with a single linear form,
//! `w·x + b`, and maps the score through the logistic function to a calibrated
//! probability of the positive class. Label order and the decision threshold
//! come from the trained artifact, never from assumptions in code.

use serde::{Deserialize, Serialize};

use crate::error::{ChaffError, Result};

/// A trained binary logistic classifier.
///
/// `labels[0]` is the negative class and `labels[1]` the positive class; the
/// weight vector points toward the positive class. Immutable after
/// construction and safe to share across threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Linear coefficients, one per feature column.
    weights: Vec<f64>,
    /// Intercept term; alone determines the prediction for a zero vector.
    bias: f64,
    /// Class labels as `[negative, positive]`.
    labels: [String; 2],
    /// Probability cutoff for predicting the positive class.
    threshold: f64,
}

impl LogisticModel {
    /// Create a model from trained parameters.
    ///
    /// Fails on non-finite weights or bias, duplicate labels, or a threshold
    /// outside `[0, 1]`.
    pub fn new(
        weights: Vec<f64>,
        bias: f64,
        labels: [String; 2],
        threshold: f64,
    ) -> Result<Self> {
        if let Some(weight) = weights.iter().find(|w| !w.is_finite()) {
            return Err(ChaffError::invalid_operation(format!(
                "Model weights must be finite, found {weight}"
            )));
        }
        if !bias.is_finite() {
            return Err(ChaffError::invalid_operation(format!(
                "Model bias must be finite, found {bias}"
            )));
        }
        if labels[0] == labels[1] {
            return Err(ChaffError::invalid_operation(format!(
                "Class labels must be distinct, both are {:?}",
                labels[0]
            )));
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ChaffError::invalid_operation(format!(
                "Decision threshold must lie in [0, 1], got {threshold}"
            )));
        }

        Ok(LogisticModel {
            weights,
            bias,
            labels,
            threshold,
        })
    }

    /// The raw linear score `w·x + b`.
    ///
    /// # Panics
    ///
    /// Panics if `features` does not match the trained weight dimension. A
    /// mismatched vector is a programming error on the caller's side; it is
    /// never truncated or padded.
    pub fn decision_function(&self, features: &[f64]) -> f64 {
        assert_eq!(
            features.len(),
            self.weights.len(),
            "feature vector has {} entries but the model expects {}",
            features.len(),
            self.weights.len()
        );

        let dot: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        dot + self.bias
    }

    /// Class probabilities in label order `[p(negative), p(positive)]`.
    ///
    /// The pair always sums to 1.0 and each entry lies in `[0, 1]`.
    pub fn predict_proba(&self, features: &[f64]) -> [f64; 2] {
        let p_positive = sigmoid(self.decision_function(features));
        [1.0 - p_positive, p_positive]
    }

    /// The predicted label: positive iff `p(positive) >= threshold`.
    pub fn predict(&self, features: &[f64]) -> &str {
        let [_, p_positive] = self.predict_proba(features);
        if p_positive >= self.threshold {
            &self.labels[1]
        } else {
            &self.labels[0]
        }
    }

    /// The feature dimension this model expects.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Class labels as `[negative, positive]`.
    pub fn labels(&self) -> &[String; 2] {
        &self.labels
    }

    /// The decision threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The intercept term.
    pub fn bias(&self) -> f64 {
        self.bias
    }
}

/// Numerically stable logistic function.
///
/// The naive `1 / (1 + exp(-z))` overflows `exp` for large negative scores;
/// splitting on the sign keeps the exponent non-positive in both branches.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

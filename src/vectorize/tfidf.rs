//! TF-IDF vectorizer: the text-to-feature transformation.
//!
//! A fitted vectorizer holds a fixed [`Vocabulary`], one smoothed IDF weight
//! per column, and the [`TokenizerConfig`] that produced them. `transform`
//! maps any UTF-8 string to a length-V feature vector: raw term counts over
//! the vocabulary, scaled by IDF, then L2-normalized. Inputs with no
//! recognized tokens map to the all-zero vector; nothing about transformation
//! can fail for well-formed text.

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::config::TokenizerConfig;
use crate::error::{ChaffError, Result};
use crate::vectorize::vocabulary::Vocabulary;

/// TF-IDF vectorizer over a fixed vocabulary.
///
/// Immutable once constructed; a single instance serves concurrent
/// `transform` calls without locking.
pub struct TfIdfVectorizer {
    /// Tokenizer configuration, the source of truth for the analysis pipeline.
    config: TokenizerConfig,
    /// Analyzer built from `config`.
    analyzer: PipelineAnalyzer,
    /// Token -> column index mapping.
    vocabulary: Vocabulary,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
    /// Number of documents seen at fit time.
    n_documents: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("dimension", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on a training corpus.
    ///
    /// Tokenizes every document with the analyzer `config` describes, builds
    /// the vocabulary from tokens appearing in at least `min_df` documents,
    /// and computes the smoothed IDF
    /// `idf[i] = ln((1 + N) / (1 + df_i)) + 1`, which is strictly positive
    /// even for a token present in every document.
    ///
    /// Column indices are assigned in sorted token order, so fitting the same
    /// corpus twice yields identical vectorizers.
    pub fn fit(config: TokenizerConfig, documents: &[String], min_df: usize) -> Result<Self> {
        let analyzer = config.build_analyzer()?;
        let n_documents = documents.len();

        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        for doc in documents {
            let mut unique_tokens: Vec<String> =
                analyzer.analyze(doc)?.map(|token| token.text).collect();
            unique_tokens.sort_unstable();
            unique_tokens.dedup();

            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let min_df = min_df.max(1);
        let mut kept: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= min_df)
            .collect();
        kept.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut idf = Vec::with_capacity(kept.len());
        for (_, df) in &kept {
            idf.push(((1.0 + n_documents as f64) / (1.0 + *df as f64)).ln() + 1.0);
        }

        let vocabulary = Vocabulary::from_ordered_tokens(kept.into_iter().map(|(token, _)| token));

        log::debug!(
            "fitted vectorizer: {} documents, {} vocabulary columns",
            n_documents,
            vocabulary.len()
        );

        Ok(TfIdfVectorizer {
            config,
            analyzer,
            vocabulary,
            idf,
            n_documents,
        })
    }

    /// Reassemble a vectorizer from trained state (the artifact load path).
    ///
    /// Validates that the IDF array matches the vocabulary dimension and
    /// carries only finite, non-negative weights.
    pub fn from_parts(
        config: TokenizerConfig,
        vocabulary: Vocabulary,
        idf: Vec<f64>,
        n_documents: usize,
    ) -> Result<Self> {
        if idf.len() != vocabulary.len() {
            return Err(ChaffError::invalid_operation(format!(
                "IDF array has {} entries for a vocabulary of {} tokens",
                idf.len(),
                vocabulary.len()
            )));
        }
        if let Some(weight) = idf.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(ChaffError::invalid_operation(format!(
                "IDF weights must be finite and non-negative, found {weight}"
            )));
        }

        let analyzer = config.build_analyzer()?;

        Ok(TfIdfVectorizer {
            config,
            analyzer,
            vocabulary,
            idf,
            n_documents,
        })
    }

    /// Transform a message into a TF-IDF feature vector.
    ///
    /// Out-of-vocabulary tokens are dropped. The result is L2-normalized
    /// unless it is the zero vector (empty or fully out-of-vocabulary input),
    /// which is returned unchanged rather than divided by zero.
    pub fn transform(&self, text: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in self.analyzer.analyze(text)? {
            if let Some(index) = self.vocabulary.get(&token.text) {
                features[index] += 1.0;
            }
        }

        for (count, idf) in features.iter_mut().zip(&self.idf) {
            *count *= idf;
        }

        l2_normalize(&mut features);

        Ok(features)
    }

    /// The feature dimension V (= vocabulary size).
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// The tokenizer configuration this vectorizer was fitted under.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The IDF weight array, one entry per vocabulary column.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Analyze a message with this vectorizer's pipeline (debugging aid).
    pub fn analyze(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }
}

/// Scale a vector to unit Euclidean norm; the zero vector is left unchanged.
fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TfIdfVectorizer {
        let documents = vec![
            "free prize win free".to_string(),
            "win a free voucher now".to_string(),
            "meeting tomorrow morning".to_string(),
            "pick up milk tomorrow".to_string(),
        ];
        TfIdfVectorizer::fit(TokenizerConfig::default(), &documents, 1).unwrap()
    }

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let vectorizer = fitted();
        let tokens = vectorizer.vocabulary().tokens_by_index();

        let mut sorted = tokens.clone();
        sorted.sort_unstable();
        assert_eq!(tokens, sorted);
        assert_eq!(vectorizer.dimension(), vectorizer.idf().len());
    }

    #[test]
    fn test_fit_min_df_prunes_rare_tokens() {
        let documents = vec![
            "free prize".to_string(),
            "free voucher".to_string(),
            "rare".to_string(),
        ];
        let vectorizer = TfIdfVectorizer::fit(TokenizerConfig::default(), &documents, 2).unwrap();

        assert!(vectorizer.vocabulary().contains("free"));
        assert!(!vectorizer.vocabulary().contains("rare"));
        assert!(!vectorizer.vocabulary().contains("prize"));
    }

    #[test]
    fn test_idf_formula() {
        let documents = vec![
            "free".to_string(),
            "free".to_string(),
            "meeting".to_string(),
        ];
        let vectorizer = TfIdfVectorizer::fit(TokenizerConfig::default(), &documents, 1).unwrap();

        // N = 3; df("free") = 2; df("meeting") = 1
        let free_idx = vectorizer.vocabulary().get("free").unwrap();
        let meeting_idx = vectorizer.vocabulary().get("meeting").unwrap();
        let expected_free = (4.0_f64 / 3.0).ln() + 1.0;
        let expected_meeting = (4.0_f64 / 2.0).ln() + 1.0;

        assert!((vectorizer.idf()[free_idx] - expected_free).abs() < 1e-12);
        assert!((vectorizer.idf()[meeting_idx] - expected_meeting).abs() < 1e-12);
        // The common token is discounted relative to the rare one.
        assert!(vectorizer.idf()[free_idx] < vectorizer.idf()[meeting_idx]);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = fitted();
        let features = vectorizer.transform("free prize win").unwrap();

        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(features.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_transform_empty_input_is_zero_vector() {
        let vectorizer = fitted();
        let features = vectorizer.transform("").unwrap();

        assert_eq!(features.len(), vectorizer.dimension());
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_transform_out_of_vocabulary_contributes_zero() {
        let vectorizer = fitted();
        let with_oov = vectorizer.transform("free prize zzzqqq xyzzy").unwrap();
        let without = vectorizer.transform("free prize").unwrap();

        for (a, b) in with_oov.iter().zip(&without) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transform_only_out_of_vocabulary_is_zero_vector() {
        let vectorizer = fitted();
        let features = vectorizer.transform("zzzqqq xyzzy plugh").unwrap();

        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_transform_deterministic() {
        let vectorizer = fitted();
        let message = "WIN a FREE voucher tomorrow!";

        let first = vectorizer.transform(message).unwrap();
        let second = vectorizer.transform(message).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_transform_case_insensitive_under_default_config() {
        let vectorizer = fitted();

        let upper = vectorizer.transform("FREE").unwrap();
        let lower = vectorizer.transform("free").unwrap();

        assert_eq!(upper, lower);
    }

    #[test]
    fn test_fit_deterministic() {
        let documents = vec![
            "free prize win".to_string(),
            "meeting tomorrow".to_string(),
        ];
        let first = TfIdfVectorizer::fit(TokenizerConfig::default(), &documents, 1).unwrap();
        let second = TfIdfVectorizer::fit(TokenizerConfig::default(), &documents, 1).unwrap();

        assert_eq!(first.vocabulary().tokens_by_index(), second.vocabulary().tokens_by_index());
        assert_eq!(first.idf(), second.idf());
    }

    #[test]
    fn test_from_parts_rejects_idf_length_mismatch() {
        let vocabulary = Vocabulary::from_ordered_tokens(vec!["free", "win"]);
        let result = TfIdfVectorizer::from_parts(
            TokenizerConfig::default(),
            vocabulary,
            vec![1.0],
            10,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_parts_rejects_negative_idf() {
        let vocabulary = Vocabulary::from_ordered_tokens(vec!["free", "win"]);
        let result = TfIdfVectorizer::from_parts(
            TokenizerConfig::default(),
            vocabulary,
            vec![1.0, -0.5],
            10,
        );
        assert!(result.is_err());
    }
}

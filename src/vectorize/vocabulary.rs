//! Vocabulary: the fixed token-to-column mapping of a trained vectorizer.

use ahash::AHashMap;

use crate::error::{ChaffError, Result};

/// An immutable mapping from normalized token to feature column index.
///
/// Indices are dense: a vocabulary of V tokens uses exactly the columns
/// `0..V-1`, each once. This is validated on construction so a loaded
/// artifact can never address columns outside the feature vector.
///
/// Tokens absent from the vocabulary simply contribute nothing to a feature
/// vector; lookups never fail.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    map: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit (token, column index) entries.
    ///
    /// Fails unless the indices form the dense range `0..len`, each used
    /// exactly once.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let map: AHashMap<String, usize> = entries.into_iter().collect();

        let mut seen = vec![false; map.len()];
        for (token, &index) in &map {
            if index >= map.len() {
                return Err(ChaffError::invalid_operation(format!(
                    "Vocabulary index {index} for token {token:?} is out of range for {} columns",
                    map.len()
                )));
            }
            if seen[index] {
                return Err(ChaffError::invalid_operation(format!(
                    "Vocabulary index {index} is assigned to more than one token"
                )));
            }
            seen[index] = true;
        }

        Ok(Vocabulary { map })
    }

    /// Build a vocabulary by assigning column indices in the order given.
    ///
    /// The caller is responsible for ordering; `fit` passes tokens sorted so
    /// the assignment is deterministic.
    pub fn from_ordered_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| (token.into(), index))
            .collect();
        Vocabulary { map }
    }

    /// Look up the column index of a token.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.map.get(token).copied()
    }

    /// Check whether a token is in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.map.contains_key(token)
    }

    /// Get the number of tokens (= feature columns).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (token, column index) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(token, &index)| (token.as_str(), index))
    }

    /// Tokens ordered by column index, for display and artifact output.
    pub fn tokens_by_index(&self) -> Vec<&str> {
        let mut tokens: Vec<(&str, usize)> = self.iter().collect();
        tokens.sort_by_key(|&(_, index)| index);
        tokens.into_iter().map(|(token, _)| token).collect()
    }
}

//! Weighted term vectors and cosine similarity.

use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::semantic::terms::TermDictionary;

/// Weight applied to tokens found in the technical vocabulary.
const TECHNICAL_TERM_WEIGHT: f64 = 2.0;
const PLAIN_TERM_WEIGHT: f64 = 1.0;

/// Absolute product-of-weights threshold for the matched-term heuristic.
/// Not similarity-normalized: accumulated weights are always >= 1.0 when a
/// term occurs, so this effectively keeps every term present in both
/// vectors. Kept explicit because the threshold is part of the contract.
const MATCHED_TERM_THRESHOLD: f64 = 0.1;

/// Lower-case, strip diacritics (NFD decomposition minus combining marks)
/// and replace every non-alphanumeric character with whitespace.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Normalized tokens of length > 2.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .map(|t| t.to_string())
        .collect()
}

/// Bag-of-words vector with per-term accumulated weights and a precomputed
/// magnitude. Built once per text and reused across comparisons.
#[derive(Debug, Clone, Default)]
pub struct SemanticVector {
    weights: HashMap<String, f64>,
    magnitude: f64,
}

impl SemanticVector {
    pub fn build(text: &str, dictionary: &TermDictionary) -> Self {
        let mut weights: HashMap<String, f64> = HashMap::new();

        for token in tokenize(text) {
            let weight = if dictionary.is_technical(&token) {
                TECHNICAL_TERM_WEIGHT
            } else {
                PLAIN_TERM_WEIGHT
            };
            *weights.entry(token).or_insert(0.0) += weight;
        }

        let magnitude = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self { weights, magnitude }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Cosine similarity; 0 when either vector has zero magnitude.
    pub fn cosine(&self, other: &SemanticVector) -> f64 {
        if self.magnitude == 0.0 || other.magnitude == 0.0 {
            return 0.0;
        }

        let dot: f64 = self
            .weights
            .iter()
            .filter_map(|(term, w)| other.weights.get(term).map(|o| w * o))
            .sum();

        dot / (self.magnitude * other.magnitude)
    }

    /// Terms present in both vectors whose weight product exceeds the
    /// absolute threshold. Sorted for deterministic output.
    pub fn matched_terms(&self, other: &SemanticVector) -> Vec<String> {
        let mut matched: Vec<String> = self
            .weights
            .iter()
            .filter(|&(term, w)| {
                other
                    .weights
                    .get(term)
                    .is_some_and(|o| w * o > MATCHED_TERM_THRESHOLD)
            })
            .map(|(term, _)| term.clone())
            .collect();
        matched.sort_unstable();
        matched
    }
}

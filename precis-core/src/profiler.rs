//! Lexical profiling: normalized importance weight per word stem

use crate::config::defaults::MIN_WORD_CHARS;
use crate::text::{is_punctuation_token, Segmenter, Stemmer, StopwordSet};
use std::collections::HashMap;

/// Normalized stem frequencies of one document
///
/// The most frequent qualifying stem has weight exactly `1.0`; every other
/// stem is scaled proportionally. Unseen stems weigh `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StemWeights {
    weights: HashMap<String, f64>,
}

impl StemWeights {
    /// Profile `normalized` text
    ///
    /// Tokens are lowercased; stopwords, pure punctuation and tokens shorter
    /// than three characters are ignored before stemming.
    pub fn build(
        normalized: &str,
        segmenter: &dyn Segmenter,
        stopwords: &StopwordSet,
        stemmer: &dyn Stemmer,
    ) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in segmenter.words(normalized) {
            let word = token.to_lowercase();
            if word.chars().count() < MIN_WORD_CHARS
                || is_punctuation_token(&word)
                || stopwords.contains(&word)
            {
                continue;
            }
            *counts.entry(stemmer.stem(&word).into_owned()).or_insert(0) += 1;
        }

        Self::from_counts(counts)
    }

    /// Normalize raw stem counts by their maximum
    pub fn from_counts(counts: HashMap<String, usize>) -> Self {
        let max = counts.values().copied().max().unwrap_or(0);
        if max == 0 {
            return Self::default();
        }

        let max = max as f64;
        Self {
            weights: counts
                .into_iter()
                .filter(|&(_, count)| count > 0)
                .map(|(stem, count)| (stem, count as f64 / max))
                .collect(),
        }
    }

    /// Weight of `stem`, `0.0` if absent
    pub fn weight(&self, stem: &str) -> f64 {
        self.weights.get(stem).copied().unwrap_or(0.0)
    }

    /// Largest weight, `None` for an empty profile
    pub fn max_weight(&self) -> Option<f64> {
        self.weights.values().copied().reduce(f64::max)
    }

    /// Number of distinct stems
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no stem survived filtering
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(stem, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(stem, &w)| (stem.as_str(), w))
    }

    /// The `n` heaviest stems, heaviest first, ties by stem
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

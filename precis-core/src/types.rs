//! Core data types shared across the pipeline

use serde::{Deserialize, Serialize};

/// A sentence of the normalized document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position in document order, starting at 0
    pub index: usize,
    /// Verbatim sentence text
    pub text: String,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Composite relevance score of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Index of the scored sentence
    pub index: usize,
    /// Composite score (sum of heuristic terms)
    pub score: f64,
}

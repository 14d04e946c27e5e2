//! Summary assembly and compression statistics

use crate::text::Segmenter;
use crate::types::Sentence;
use serde::{Deserialize, Serialize};

/// Size of a document before and after summarization
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Sentences in the document
    pub original_sentences: usize,
    /// Sentences in the summary
    pub summary_sentences: usize,
    /// Word tokens in the raw document
    pub original_words: usize,
    /// Word tokens in the summary
    pub summary_words: usize,
    /// Percentage of word tokens removed, one decimal place
    pub compression_ratio: f64,
}

impl Statistics {
    /// Count words of both texts and derive the compression ratio
    ///
    /// Word counts include every token the segmenter yields, punctuation
    /// included.
    pub fn compute(
        original_text: &str,
        summary_text: &str,
        original_sentences: usize,
        summary_sentences: usize,
        segmenter: &dyn Segmenter,
    ) -> Self {
        let original_words = segmenter.words(original_text).len();
        let summary_words = segmenter.words(summary_text).len();

        Self {
            original_sentences,
            summary_sentences,
            original_words,
            summary_words,
            compression_ratio: compression_ratio(original_words, summary_words),
        }
    }

    /// Statistics of a document returned as is
    pub fn unchanged(text: &str, sentences: usize, segmenter: &dyn Segmenter) -> Self {
        let words = segmenter.words(text).len();

        Self {
            original_sentences: sentences,
            summary_sentences: sentences,
            original_words: words,
            summary_words: words,
            compression_ratio: 0.0,
        }
    }
}

/// Percentage of words removed, rounded to one decimal and clamped to `[0, 100]`
pub fn compression_ratio(original_words: usize, summary_words: usize) -> f64 {
    if original_words == 0 {
        return 0.0;
    }

    let removed = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
    ((removed * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

/// Join selected sentences with single spaces
pub fn join_sentences(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of summarizing one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Summary text
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<Sentence>,
    /// Compression statistics
    pub statistics: Statistics,
}

impl Summary {
    /// Assemble a summary from selected sentences
    pub(crate) fn from_selection(
        original_text: &str,
        original_sentences: usize,
        selected: Vec<Sentence>,
        segmenter: &dyn Segmenter,
    ) -> Self {
        let text = join_sentences(&selected);
        let statistics = Statistics::compute(
            original_text,
            &text,
            original_sentences,
            selected.len(),
            segmenter,
        );

        Self {
            text,
            sentences: selected,
            statistics,
        }
    }

    /// A summary that is the original text verbatim
    pub(crate) fn passthrough(
        original_text: &str,
        sentences: Vec<Sentence>,
        segmenter: &dyn Segmenter,
    ) -> Self {
        let statistics = Statistics::unchanged(original_text, sentences.len(), segmenter);

        Self {
            text: original_text.to_string(),
            sentences,
            statistics,
        }
    }

    /// Split into summary text and statistics
    pub fn into_parts(self) -> (String, Statistics) {
        (self.text, self.statistics)
    }
}

//! Sentence selection under a ratio and a hard cap

use crate::types::{ScoredSentence, Sentence};
use std::collections::HashSet;

/// Number of sentences to keep from a document of `total` sentences
///
/// `floor(total * ratio)`, raised to at least one and capped at `max_sentences`.
pub fn target_count(total: usize, summary_ratio: f64, max_sentences: usize) -> usize {
    let by_ratio = (total as f64 * summary_ratio).floor() as usize;
    by_ratio.max(1).min(max_sentences)
}

/// Pick the highest-scoring sentences and return them in document order
///
/// Ties are broken by lower original index. Sentences without a score are
/// never selected.
pub fn select(
    sentences: &[Sentence],
    scores: &[ScoredSentence],
    summary_ratio: f64,
    max_sentences: usize,
) -> Vec<Sentence> {
    let target = target_count(sentences.len(), summary_ratio, max_sentences);

    let mut ranked: Vec<&ScoredSentence> = scores.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.index.cmp(&b.index))
    });

    let picked: HashSet<usize> = ranked.iter().take(target).map(|s| s.index).collect();

    log::debug!(
        "selected {} of {} sentences (target {})",
        picked.len(),
        sentences.len(),
        target
    );

    sentences
        .iter()
        .filter(|s| picked.contains(&s.index))
        .cloned()
        .collect()
}

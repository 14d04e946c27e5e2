//! Summarizer and builder
//!
//! A [`Summarizer`] owns only immutable, shareable state. Once built it never
//! fails: degenerate input is returned unchanged with no-reduction
//! statistics.

use crate::config::{defaults, Config};
use crate::error::Result;
use crate::language::LanguageResources;
use crate::profiler::StemWeights;
use crate::report::{Statistics, Summary};
use crate::scorer::{
    HeuristicScorer, ScoringContext, ScoringWeights, SentenceScorer, TokenizedSentence,
};
use crate::selector::select;
use crate::text::{normalize, RuleSegmenter, Segmenter, Stemmer};
use crate::types::{ScoredSentence, Sentence};
use std::sync::Arc;

/// Extractive summarizer
#[derive(Clone)]
pub struct Summarizer {
    config: Config,
    resources: Arc<LanguageResources>,
    segmenter: Arc<dyn Segmenter>,
    stemmer: Arc<dyn Stemmer>,
    scorer: Arc<dyn SentenceScorer>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .field("language", &self.resources.code())
            .finish_non_exhaustive()
    }
}

impl Summarizer {
    /// Create a summarizer with English resources and the default configuration
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a summarizer with English resources and a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder
    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::new()
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Language resources in use
    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Summarize with the configured ratio and cap
    pub fn summarize(&self, text: &str) -> Summary {
        self.summarize_with(text, self.config.summary_ratio, self.config.max_sentences)
    }

    /// Summarize with an explicit ratio and cap
    ///
    /// Documents of at most two sentences are returned verbatim. Out of range
    /// values saturate: a ratio at or below zero still keeps one sentence and
    /// a cap of zero keeps none.
    pub fn summarize_with(&self, text: &str, summary_ratio: f64, max_sentences: usize) -> Summary {
        let normalized = normalize(text);
        let sentences = self.split_sentences(&normalized);

        if sentences.len() <= defaults::PASSTHROUGH_SENTENCES {
            log::debug!("{} sentence(s), returning text unchanged", sentences.len());
            return Summary::passthrough(text, sentences, self.segmenter.as_ref());
        }

        let scores = self.score_sentences(&normalized, &sentences);
        let total = sentences.len();
        let selected = select(&sentences, &scores, summary_ratio, max_sentences);

        Summary::from_selection(text, total, selected, self.segmenter.as_ref())
    }

    /// Score every scorable sentence, in document order
    ///
    /// Sentences without countable words are absent from the result.
    pub fn rank(&self, text: &str) -> Vec<ScoredSentence> {
        let normalized = normalize(text);
        let sentences = self.split_sentences(&normalized);
        self.score_sentences(&normalized, &sentences)
    }

    fn split_sentences(&self, normalized: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = self
            .segmenter
            .sentences(normalized)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence::new(index, text))
            .collect();

        log::debug!("segmented {} sentences", sentences.len());
        sentences
    }

    fn score_sentences(&self, normalized: &str, sentences: &[Sentence]) -> Vec<ScoredSentence> {
        let stem_weights = StemWeights::build(
            normalized,
            self.segmenter.as_ref(),
            self.resources.stopwords(),
            self.stemmer.as_ref(),
        );
        log::debug!("profiled {} distinct stems", stem_weights.len());

        let context = ScoringContext {
            total_sentences: sentences.len(),
            stem_weights: &stem_weights,
            stemmer: self.stemmer.as_ref(),
        };

        sentences
            .iter()
            .map(|sentence| TokenizedSentence::new(sentence, self.segmenter.as_ref()))
            .filter(|tokenized| !tokenized.is_empty())
            .map(|tokenized| ScoredSentence {
                index: tokenized.sentence.index,
                score: self.scorer.score(&tokenized, &context),
            })
            .collect()
    }
}

/// Builder for [`Summarizer`]
///
/// Unset collaborators default to the ones implied by the resources:
/// [`RuleSegmenter`] with their abbreviation and sentence starter tables,
/// their stemming algorithm and a [`HeuristicScorer`] with the configured
/// weights.
#[derive(Default)]
pub struct SummarizerBuilder {
    config: Config,
    resources: Option<LanguageResources>,
    segmenter: Option<Arc<dyn Segmenter>>,
    stemmer: Option<Arc<dyn Stemmer>>,
    scorer: Option<Arc<dyn SentenceScorer>>,
}

impl SummarizerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the fraction of sentences kept
    pub fn summary_ratio(mut self, ratio: f64) -> Self {
        self.config.summary_ratio = ratio;
        self
    }

    /// Set the summary length cap
    pub fn max_sentences(mut self, max: usize) -> Self {
        self.config.max_sentences = max;
        self
    }

    /// Set the heuristic scoring coefficients
    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Set the language resources
    pub fn resources(mut self, resources: LanguageResources) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Set a custom segmenter
    pub fn segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Set a custom stemmer
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Set a custom scorer; configured weights are then ignored
    pub fn scorer(mut self, scorer: Arc<dyn SentenceScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Build the summarizer
    pub fn build(self) -> Result<Summarizer> {
        self.config.validate()?;

        let resources = match self.resources {
            Some(resources) => resources,
            None => LanguageResources::english()?,
        };

        let segmenter: Arc<dyn Segmenter> = match self.segmenter {
            Some(segmenter) => segmenter,
            None => Arc::new(RuleSegmenter::from_resources(&resources)),
        };
        let stemmer: Arc<dyn Stemmer> = match self.stemmer {
            Some(stemmer) => stemmer,
            None => resources.stemmer_algorithm().build(),
        };
        let scorer: Arc<dyn SentenceScorer> = match self.scorer {
            Some(scorer) => scorer,
            None => Arc::new(HeuristicScorer::with_weights(self.config.weights)?),
        };

        log::debug!(
            "built summarizer for '{}' (ratio {}, max {})",
            resources.code(),
            self.config.summary_ratio,
            self.config.max_sentences
        );

        Ok(Summarizer {
            config: self.config,
            resources: Arc::new(resources),
            segmenter,
            stemmer,
            scorer,
        })
    }
}

/// Summarize `text` with English resources
///
/// Returns the summary text and its statistics. Fails only on out of range
/// parameters.
pub fn summarize(
    text: &str,
    summary_ratio: f64,
    max_sentences: usize,
) -> Result<(String, Statistics)> {
    let config = Config::builder()
        .summary_ratio(summary_ratio)
        .max_sentences(max_sentences)
        .build()?;
    let summarizer = Summarizer::with_config(config)?;
    Ok(summarizer.summarize(text).into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::text::IdentityStemmer;

    const ARTICLE: &str = "Rust is a systems programming language. \
        It focuses on memory safety and speed. \
        The borrow checker enforces memory safety at compile time. \
        Many companies adopted Rust in 2023. \
        Memory safety without garbage collection is the main appeal of Rust.";

    struct LengthScorer;

    impl SentenceScorer for LengthScorer {
        fn score(&self, sentence: &TokenizedSentence<'_>, _: &ScoringContext<'_>) -> f64 {
            sentence.word_count as f64
        }
    }

    #[test]
    fn test_summary_is_ordered_subsequence() {
        let summarizer = Summarizer::new().unwrap();
        let summary = summarizer.summarize_with(ARTICLE, 0.4, 3);

        assert_eq!(summary.sentences.len(), 2);
        assert!(summary.sentences.windows(2).all(|w| w[0].index < w[1].index));
        assert_eq!(summary.statistics.original_sentences, 5);
        assert_eq!(summary.statistics.summary_sentences, 2);
    }

    #[test]
    fn test_first_sentence_is_kept() {
        let summarizer = Summarizer::new().unwrap();
        let summary = summarizer.summarize_with(ARTICLE, 0.4, 3);

        assert_eq!(summary.sentences[0].index, 0);
        assert!(summary.text.starts_with("Rust is a systems programming language."));
    }

    #[test]
    fn test_passthrough_returns_raw_text() {
        let summarizer = Summarizer::new().unwrap();
        let text = "  \"Quoted\" first line.\n Second line!  ";
        let summary = summarizer.summarize(text);

        assert_eq!(summary.text, text);
        assert_eq!(summary.sentences.len(), 2);
        assert_eq!(summary.statistics.compression_ratio, 0.0);
        assert_eq!(
            summary.statistics.original_words,
            summary.statistics.summary_words
        );
    }

    #[test]
    fn test_rank_scores_every_sentence() {
        let summarizer = Summarizer::new().unwrap();
        let ranked = summarizer.rank(ARTICLE);

        let indices: Vec<_> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(ranked.iter().all(|s| s.score > 0.0));
    }

    #[test]
    fn test_custom_scorer_drives_selection() {
        let summarizer = Summarizer::builder()
            .scorer(Arc::new(LengthScorer))
            .build()
            .unwrap();
        let summary = summarizer.summarize_with("A b. C d e f g. H i j.", 0.3, 5);

        assert_eq!(summary.sentences.len(), 1);
        assert_eq!(summary.sentences[0].index, 1);
        assert_eq!(summary.text, "C d e f g.");
    }

    #[test]
    fn test_custom_stemmer() {
        let summarizer = Summarizer::builder()
            .stemmer(Arc::new(IdentityStemmer))
            .build()
            .unwrap();
        assert_eq!(summarizer.rank(ARTICLE).len(), 5);
    }

    #[test]
    fn test_invalid_config_fails_at_build() {
        let result = Summarizer::builder().summary_ratio(1.5).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_cap_keeps_nothing() {
        let summarizer = Summarizer::new().unwrap();
        let summary = summarizer.summarize_with(ARTICLE, 0.4, 0);

        assert!(summary.sentences.is_empty());
        assert_eq!(summary.text, "");
        assert_eq!(summary.statistics.compression_ratio, 100.0);
    }

    #[test]
    fn test_free_function() {
        let (text, stats) = summarize(ARTICLE, 0.4, 3).unwrap();

        assert!(!text.is_empty());
        assert_eq!(stats.summary_sentences, 2);
        assert!(summarize(ARTICLE, 0.0, 3).is_err());
        assert!(summarize(ARTICLE, 0.3, 0).is_err());
    }

    #[test]
    fn test_summarizer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Summarizer>();
    }
}

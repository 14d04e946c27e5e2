//! Sentence scoring
//!
//! [`HeuristicScorer`] adds six independent, non-negative terms: mean stem
//! weight, position in the document, sentence length, numeric content,
//! capitalized words and emphatic punctuation. The coefficients live in
//! [`ScoringWeights`] so each term can be audited and tuned on its own.

use crate::error::{Error, Result};
use crate::profiler::StemWeights;
use crate::text::{is_punctuation_token, Segmenter, Stemmer};
use crate::types::Sentence;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Document-level inputs shared by every sentence score
pub struct ScoringContext<'a> {
    /// Number of sentences in the document
    pub total_sentences: usize,
    /// Stem weights of the document
    pub stem_weights: &'a StemWeights,
    /// Stemmer used to build `stem_weights`
    pub stemmer: &'a dyn Stemmer,
}

/// A sentence with its lowercase word tokens
#[derive(Debug, Clone)]
pub struct TokenizedSentence<'a> {
    /// The sentence being scored
    pub sentence: &'a Sentence,
    /// Lowercase tokens, punctuation included
    pub tokens: Vec<String>,
    /// Number of non-punctuation tokens
    pub word_count: usize,
}

impl<'a> TokenizedSentence<'a> {
    /// Tokenize `sentence` with `segmenter`
    pub fn new(sentence: &'a Sentence, segmenter: &dyn Segmenter) -> Self {
        let tokens: Vec<String> = segmenter
            .words(&sentence.text)
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        let word_count = tokens.iter().filter(|t| !is_punctuation_token(t)).count();

        Self {
            sentence,
            tokens,
            word_count,
        }
    }

    /// Whether the sentence has no countable words
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Computes a relevance score for one sentence
///
/// Sentences without countable words are filtered out before scoring.
pub trait SentenceScorer: Send + Sync {
    /// Score `sentence`; higher is more relevant
    fn score(&self, sentence: &TokenizedSentence<'_>, context: &ScoringContext<'_>) -> f64;
}

/// Named coefficients of the heuristic scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Bonus for the first sentence
    pub first_sentence: f64,
    /// Bonus for the last sentence
    pub last_sentence: f64,
    /// Bonus for other sentences in the leading fraction of the document
    pub early_sentence: f64,
    /// Leading fraction of the document that counts as early
    pub early_fraction: f64,
    /// Bonus for sentences within the preferred length band
    pub preferred_length: f64,
    pub preferred_min_words: usize,
    pub preferred_max_words: usize,
    /// Bonus for sentences within the acceptable length band
    pub acceptable_length: f64,
    pub acceptable_min_words: usize,
    pub acceptable_max_words: usize,
    /// Bonus for sentences containing a digit
    pub numeric: f64,
    /// Bonus for sentences containing a capitalized word
    pub proper_noun: f64,
    /// Bonus for sentences containing `!` or `?`
    pub emphasis: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            first_sentence: 0.3,
            last_sentence: 0.2,
            early_sentence: 0.1,
            early_fraction: 0.3,
            preferred_length: 0.2,
            preferred_min_words: 10,
            preferred_max_words: 25,
            acceptable_length: 0.1,
            acceptable_min_words: 5,
            acceptable_max_words: 35,
            numeric: 0.1,
            proper_noun: 0.1,
            emphasis: 0.05,
        }
    }
}

impl ScoringWeights {
    /// Check that every coefficient is finite and non-negative and that the
    /// length bands are well formed
    pub fn validate(&self) -> std::result::Result<(), String> {
        let coefficients = [
            ("first_sentence", self.first_sentence),
            ("last_sentence", self.last_sentence),
            ("early_sentence", self.early_sentence),
            ("early_fraction", self.early_fraction),
            ("preferred_length", self.preferred_length),
            ("acceptable_length", self.acceptable_length),
            ("numeric", self.numeric),
            ("proper_noun", self.proper_noun),
            ("emphasis", self.emphasis),
        ];

        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("weight '{name}' must be finite and >= 0, got {value}"));
            }
        }

        if self.early_fraction > 1.0 {
            return Err(format!(
                "early_fraction must be at most 1.0, got {}",
                self.early_fraction
            ));
        }

        if self.preferred_min_words > self.preferred_max_words {
            return Err("preferred length band is inverted".to_string());
        }

        if self.acceptable_min_words > self.acceptable_max_words {
            return Err("acceptable length band is inverted".to_string());
        }

        Ok(())
    }
}

/// Per-term contributions to a sentence score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub frequency: f64,
    pub position: f64,
    pub length: f64,
    pub numeric: f64,
    pub proper_noun: f64,
    pub emphasis: f64,
}

impl ScoreBreakdown {
    /// Composite score
    pub fn total(&self) -> f64 {
        self.frequency
            + self.position
            + self.length
            + self.numeric
            + self.proper_noun
            + self.emphasis
    }
}

/// Fixed, explainable heuristic scorer
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    weights: ScoringWeights,
    digit: Regex,
    capitalized: Regex,
}

impl HeuristicScorer {
    /// Create a scorer with the default coefficients
    pub fn new() -> Result<Self> {
        Self::with_weights(ScoringWeights::default())
    }

    /// Create a scorer with custom coefficients
    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        weights.validate().map_err(Error::InvalidConfig)?;

        Ok(Self {
            weights,
            digit: Regex::new(r"\d")?,
            capitalized: Regex::new(r"[A-Z][a-z]+")?,
        })
    }

    /// Coefficients in use
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Mean stem weight over the sentence's tokens
    pub fn frequency_term(
        &self,
        sentence: &TokenizedSentence<'_>,
        context: &ScoringContext<'_>,
    ) -> f64 {
        if sentence.word_count == 0 {
            return 0.0;
        }

        let sum: f64 = sentence
            .tokens
            .iter()
            .map(|token| context.stem_weights.weight(&context.stemmer.stem(token)))
            .sum();

        sum / sentence.word_count as f64
    }

    /// Positional prior for sentence `index` of `total`
    pub fn position_term(&self, index: usize, total: usize) -> f64 {
        let w = &self.weights;
        if index == 0 {
            w.first_sentence
        } else if index + 1 == total {
            w.last_sentence
        } else if (index as f64) < total as f64 * w.early_fraction {
            w.early_sentence
        } else {
            0.0
        }
    }

    /// Readability band bonus for a sentence of `word_count` words
    pub fn length_term(&self, word_count: usize) -> f64 {
        let w = &self.weights;
        if (w.preferred_min_words..=w.preferred_max_words).contains(&word_count) {
            w.preferred_length
        } else if (w.acceptable_min_words..=w.acceptable_max_words).contains(&word_count) {
            w.acceptable_length
        } else {
            0.0
        }
    }

    /// Bonus when `text` contains a decimal digit
    pub fn numeric_term(&self, text: &str) -> f64 {
        if self.digit.is_match(text) {
            self.weights.numeric
        } else {
            0.0
        }
    }

    /// Bonus when `text` contains a capitalized word
    pub fn proper_noun_term(&self, text: &str) -> f64 {
        if self.capitalized.is_match(text) {
            self.weights.proper_noun
        } else {
            0.0
        }
    }

    /// Bonus when `text` contains `!` or `?`
    pub fn emphasis_term(&self, text: &str) -> f64 {
        if text.contains(['!', '?']) {
            self.weights.emphasis
        } else {
            0.0
        }
    }

    /// All six terms for one sentence
    pub fn breakdown(
        &self,
        sentence: &TokenizedSentence<'_>,
        context: &ScoringContext<'_>,
    ) -> ScoreBreakdown {
        let text = sentence.sentence.text.as_str();

        ScoreBreakdown {
            frequency: self.frequency_term(sentence, context),
            position: self.position_term(sentence.sentence.index, context.total_sentences),
            length: self.length_term(sentence.word_count),
            numeric: self.numeric_term(text),
            proper_noun: self.proper_noun_term(text),
            emphasis: self.emphasis_term(text),
        }
    }
}

impl SentenceScorer for HeuristicScorer {
    fn score(&self, sentence: &TokenizedSentence<'_>, context: &ScoringContext<'_>) -> f64 {
        let breakdown = self.breakdown(sentence, context);
        log::trace!(
            "sentence {} scored {:.4} ({:?})",
            sentence.sentence.index,
            breakdown.total(),
            breakdown
        );
        breakdown.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{IdentityStemmer, RuleSegmenter};
    use std::collections::HashMap;

    fn scorer() -> HeuristicScorer {
        HeuristicScorer::new().unwrap()
    }

    #[test]
    fn test_position_term() {
        let s = scorer();
        assert_eq!(s.position_term(0, 10), 0.3);
        assert_eq!(s.position_term(9, 10), 0.2);
        assert_eq!(s.position_term(1, 10), 0.1);
        assert_eq!(s.position_term(2, 10), 0.1);
        // 3 < 0.3 * 10 is false
        assert_eq!(s.position_term(3, 10), 0.0);
        assert_eq!(s.position_term(5, 10), 0.0);
    }

    #[test]
    fn test_position_first_wins_over_last() {
        assert_eq!(scorer().position_term(0, 1), 0.3);
    }

    #[test]
    fn test_length_term_bands() {
        let s = scorer();
        assert_eq!(s.length_term(4), 0.0);
        assert_eq!(s.length_term(5), 0.1);
        assert_eq!(s.length_term(9), 0.1);
        assert_eq!(s.length_term(10), 0.2);
        assert_eq!(s.length_term(25), 0.2);
        assert_eq!(s.length_term(26), 0.1);
        assert_eq!(s.length_term(35), 0.1);
        assert_eq!(s.length_term(36), 0.0);
    }

    #[test]
    fn test_surface_terms() {
        let s = scorer();
        assert_eq!(s.numeric_term("In 1999 it began."), 0.1);
        assert_eq!(s.numeric_term("No digits here."), 0.0);

        assert_eq!(s.proper_noun_term("We met Alice."), 0.1);
        assert_eq!(s.proper_noun_term("all lowercase."), 0.0);
        // A lone capital is not a capitalized word
        assert_eq!(s.proper_noun_term("plan B works."), 0.0);
        assert_eq!(s.proper_noun_term("NASA launched."), 0.0);

        assert_eq!(s.emphasis_term("Really?"), 0.05);
        assert_eq!(s.emphasis_term("Stop!"), 0.05);
        assert_eq!(s.emphasis_term("Calm."), 0.0);
    }

    #[test]
    fn test_frequency_term_is_mean_weight() {
        let s = scorer();
        let segmenter = RuleSegmenter::new();
        let stem_weights = StemWeights::from_counts(HashMap::from([
            ("rust".to_string(), 2),
            ("fast".to_string(), 1),
        ]));
        let context = ScoringContext {
            total_sentences: 1,
            stem_weights: &stem_weights,
            stemmer: &IdentityStemmer,
        };

        let sentence = Sentence::new(0, "Rust is fast.");
        let tokenized = TokenizedSentence::new(&sentence, &segmenter);

        assert_eq!(tokenized.word_count, 3);
        // (1.0 + 0.0 + 0.5) / 3
        assert!((s.frequency_term(&tokenized, &context) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_sums_all_terms() {
        let s = scorer();
        let segmenter = RuleSegmenter::new();
        let stem_weights = StemWeights::default();
        let context = ScoringContext {
            total_sentences: 3,
            stem_weights: &stem_weights,
            stemmer: &IdentityStemmer,
        };

        let sentence = Sentence::new(0, "In 2024 Alice asked why the five servers failed?");
        let tokenized = TokenizedSentence::new(&sentence, &segmenter);
        let breakdown = s.breakdown(&tokenized, &context);

        assert_eq!(breakdown.frequency, 0.0);
        assert_eq!(breakdown.position, 0.3);
        assert_eq!(breakdown.length, 0.1);
        assert_eq!(breakdown.numeric, 0.1);
        assert_eq!(breakdown.proper_noun, 0.1);
        assert_eq!(breakdown.emphasis, 0.05);
        assert!((s.score(&tokenized, &context) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_punctuation_only_sentence_has_no_words() {
        let segmenter = RuleSegmenter::new();
        let sentence = Sentence::new(0, "...");
        let tokenized = TokenizedSentence::new(&sentence, &segmenter);

        assert!(tokenized.is_empty());
        assert_eq!(tokenized.tokens.len(), 3);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            first_sentence: 1.0,
            emphasis: 0.0,
            ..ScoringWeights::default()
        };
        let s = HeuristicScorer::with_weights(weights).unwrap();

        assert_eq!(s.position_term(0, 5), 1.0);
        assert_eq!(s.emphasis_term("Why?"), 0.0);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let negative = ScoringWeights {
            numeric: -0.1,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            HeuristicScorer::with_weights(negative),
            Err(Error::InvalidConfig(_))
        ));

        let inverted = ScoringWeights {
            preferred_min_words: 30,
            preferred_max_words: 20,
            ..ScoringWeights::default()
        };
        assert!(inverted.validate().is_err());

        let nan = ScoringWeights {
            emphasis: f64::NAN,
            ..ScoringWeights::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_weights_deserialize_partial() {
        let weights: ScoringWeights =
            toml::from_str("first_sentence = 0.5\nnumeric = 0.0").unwrap();

        assert_eq!(weights.first_sentence, 0.5);
        assert_eq!(weights.numeric, 0.0);
        assert_eq!(weights.last_sentence, 0.2);
    }
}

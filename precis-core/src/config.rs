//! Summarizer configuration

use crate::error::{Error, Result};
use crate::scorer::ScoringWeights;

/// Default values
pub mod defaults {
    /// Fraction of sentences kept
    pub const SUMMARY_RATIO: f64 = 0.3;
    /// Upper bound on summary length in sentences
    pub const MAX_SENTENCES: usize = 5;
    /// Documents with at most this many sentences are returned unchanged
    pub const PASSTHROUGH_SENTENCES: usize = 2;
    /// Shortest token (in chars) that contributes to stem weights
    pub const MIN_WORD_CHARS: usize = 3;
}

/// Summary length and scoring configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) summary_ratio: f64,
    pub(crate) max_sentences: usize,
    pub(crate) weights: ScoringWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_ratio: defaults::SUMMARY_RATIO,
            max_sentences: defaults::MAX_SENTENCES,
            weights: ScoringWeights::default(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Fraction of sentences kept
    pub fn summary_ratio(&self) -> f64 {
        self.summary_ratio
    }

    /// Upper bound on summary length
    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// Scoring coefficients
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<()> {
        validate_length(self.summary_ratio, self.max_sentences)?;
        self.weights.validate().map_err(Error::InvalidConfig)
    }
}

/// Check a per-call length request
pub(crate) fn validate_length(summary_ratio: f64, max_sentences: usize) -> Result<()> {
    if !summary_ratio.is_finite() || summary_ratio <= 0.0 || summary_ratio > 1.0 {
        return Err(Error::InvalidConfig(format!(
            "summary ratio must be in (0, 1], got {summary_ratio}"
        )));
    }

    if max_sentences == 0 {
        return Err(Error::InvalidConfig("max sentences must be at least 1".to_string()));
    }

    Ok(())
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
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

    /// Set the scoring coefficients
    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

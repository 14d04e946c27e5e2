//! Configuration module

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use precis_core::config::defaults;
use precis_core::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Summary length configuration
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Heuristic scoring coefficients; omitted fields keep their defaults
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Summary length configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Fraction of sentences kept
    pub ratio: f64,

    /// Upper bound on summary length
    pub max_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ratio: defaults::SUMMARY_RATIO,
            max_sentences: defaults::MAX_SENTENCES,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Include statistics in text output
    pub statistics: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            statistics: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Summarize documents in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Largest accepted input in KB (0 = unlimited)
    pub max_input_kb: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: 0,
            max_input_kb: 10 * 1024,
        }
    }
}

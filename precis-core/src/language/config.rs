//! Configuration structures and validation
//!
//! This module defines the TOML schema for language resources.

use crate::text::StemmerAlgorithm;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub stemmer: StemmerSection,
    #[serde(default)]
    pub stopwords: StopwordSection,
    #[serde(default)]
    pub abbreviations: AbbreviationSection,
    #[serde(default)]
    pub sentence_starters: SentenceStarterSection,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Stemming algorithm selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemmerSection {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for StemmerSection {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
        }
    }
}

/// Stopword list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSection {
    #[serde(default)]
    pub words: Vec<String>,
}

/// Abbreviations organized by arbitrary category names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationSection {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Words that open a new sentence even right after an abbreviation
///
/// Matching is case-sensitive, so list capitalized forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceStarterSection {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

fn default_algorithm() -> String {
    "english".to_string()
}

impl ResourceConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("language code must not be empty".to_string());
        }

        if StemmerAlgorithm::from_name(&self.stemmer.algorithm).is_none() {
            return Err(format!(
                "unknown stemmer algorithm '{}' (expected one of: {})",
                self.stemmer.algorithm,
                StemmerAlgorithm::NAMES.join(", ")
            ));
        }

        if let Some(pos) = self.stopwords.words.iter().position(|w| w.trim().is_empty()) {
            return Err(format!("stopword entry {pos} is empty"));
        }

        for (category, entries) in &self.abbreviations.categories {
            if entries.iter().any(|a| a.trim().trim_end_matches('.').is_empty()) {
                return Err(format!("abbreviation category '{category}' has an empty entry"));
            }
        }

        for (category, entries) in &self.sentence_starters.categories {
            if let Some(entry) = entries
                .iter()
                .find(|w| w.is_empty() || !w.chars().all(char::is_alphabetic))
            {
                return Err(format!(
                    "sentence starter category '{category}' has an invalid entry '{entry}'"
                ));
            }
        }

        Ok(())
    }
}

//! Linguistic resources for summarization
//!
//! A [`LanguageResources`] value bundles the stopword list, the abbreviation
//! and sentence starter tables used by the sentence segmenter, and the
//! stemming algorithm. It is
//! loaded once, either from the embedded English table or from an external
//! TOML file, and handed to the summarizer at construction time.

pub(crate) mod config;

pub use config::ResourceConfig;

use crate::error::{Error, Result};
use crate::text::{StemmerAlgorithm, StopwordSet};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const EMBEDDED_ENGLISH: &str = include_str!("../../configs/languages/english.toml");

/// Built-in resource sets as `(code, name)` pairs
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[("en", "English")];

/// Stopwords, abbreviations and stemming choice for one language
#[derive(Debug, Clone)]
pub struct LanguageResources {
    code: String,
    name: String,
    stopwords: StopwordSet,
    abbreviations: HashSet<String>,
    sentence_starters: HashSet<String>,
    stemmer: StemmerAlgorithm,
}

impl LanguageResources {
    /// Built-in English resources (NLTK stopword list, Porter2 stemming)
    pub fn english() -> Result<Self> {
        Self::from_toml_named(EMBEDDED_ENGLISH, "built-in english")
    }

    /// Look up a built-in resource set by code or name
    pub fn builtin(language: &str) -> Result<Self> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Self::english(),
            other => Err(Error::Resource {
                source_name: other.to_string(),
                reason: "no built-in resources for this language".to_string(),
            }),
        }
    }

    /// Load resources from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_named(&content, &path.display().to_string())
    }

    /// Load resources from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_toml_named(toml_str, "inline")
    }

    fn from_toml_named(toml_str: &str, source_name: &str) -> Result<Self> {
        let config: ResourceConfig = toml::from_str(toml_str)?;
        Self::from_config(config, source_name)
    }

    /// Build resources from an already parsed configuration
    pub fn from_config(config: ResourceConfig, source_name: &str) -> Result<Self> {
        config.validate().map_err(|reason| Error::Resource {
            source_name: source_name.to_string(),
            reason,
        })?;

        let stemmer = StemmerAlgorithm::from_name(&config.stemmer.algorithm).ok_or_else(|| {
            Error::Resource {
                source_name: source_name.to_string(),
                reason: format!("unknown stemmer algorithm '{}'", config.stemmer.algorithm),
            }
        })?;

        if config.stopwords.words.is_empty() {
            log::warn!(
                "resources '{source_name}' define no stopwords; every word will be weighted"
            );
        }

        let abbreviations = config
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|abbr| abbr.trim().trim_end_matches('.').to_lowercase())
            .collect();

        let sentence_starters = config
            .sentence_starters
            .categories
            .into_values()
            .flatten()
            .collect();

        let resources = Self {
            code: config.metadata.code.trim().to_string(),
            name: config.metadata.name,
            stopwords: StopwordSet::from_words(&config.stopwords.words),
            abbreviations,
            sentence_starters,
            stemmer,
        };

        log::debug!(
            "loaded resources '{}' ({} stopwords, {} abbreviations, {} starters, stemmer {})",
            resources.code,
            resources.stopwords.len(),
            resources.abbreviations.len(),
            resources.sentence_starters.len(),
            resources.stemmer.name()
        );

        Ok(resources)
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stopword set
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Configured stemming algorithm
    pub fn stemmer_algorithm(&self) -> StemmerAlgorithm {
        self.stemmer
    }

    /// Whether `word` (without its trailing period) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .contains(&word.trim_end_matches('.').to_lowercase())
    }

    /// Known abbreviations, lowercase and without trailing period
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.abbreviations.iter().map(String::as_str)
    }

    /// Number of distinct abbreviations
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Whether `word` opens a sentence (case-sensitive)
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.sentence_starters.contains(word)
    }

    /// Known sentence starters
    pub fn sentence_starters(&self) -> impl Iterator<Item = &str> {
        self.sentence_starters.iter().map(String::as_str)
    }
}

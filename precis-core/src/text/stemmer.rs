//! Stemming collaborators

use rust_stemmers::Algorithm;
use std::borrow::Cow;
use std::sync::Arc;

/// Reduces a lowercase word to its stem
pub trait Stemmer: Send + Sync {
    /// Stem `word`; must be deterministic
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Stemming algorithm named by language resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemmerAlgorithm {
    /// No stemming, words are their own stems
    None,
    /// Porter2
    English,
    Danish,
    Dutch,
    Finnish,
    French,
    German,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl StemmerAlgorithm {
    /// Names accepted by [`StemmerAlgorithm::from_name`]
    pub const NAMES: &'static [&'static str] = &[
        "none",
        "english",
        "danish",
        "dutch",
        "finnish",
        "french",
        "german",
        "hungarian",
        "italian",
        "norwegian",
        "portuguese",
        "romanian",
        "russian",
        "spanish",
        "swedish",
        "turkish",
    ];

    /// Parse an algorithm name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let algorithm = match name.trim().to_lowercase().as_str() {
            "none" | "identity" => Self::None,
            "english" | "porter" | "porter2" => Self::English,
            "danish" => Self::Danish,
            "dutch" => Self::Dutch,
            "finnish" => Self::Finnish,
            "french" => Self::French,
            "german" => Self::German,
            "hungarian" => Self::Hungarian,
            "italian" => Self::Italian,
            "norwegian" => Self::Norwegian,
            "portuguese" => Self::Portuguese,
            "romanian" => Self::Romanian,
            "russian" => Self::Russian,
            "spanish" => Self::Spanish,
            "swedish" => Self::Swedish,
            "turkish" => Self::Turkish,
            _ => return None,
        };
        Some(algorithm)
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::English => "english",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Hungarian => "hungarian",
            Self::Italian => "italian",
            Self::Norwegian => "norwegian",
            Self::Portuguese => "portuguese",
            Self::Romanian => "romanian",
            Self::Russian => "russian",
            Self::Spanish => "spanish",
            Self::Swedish => "swedish",
            Self::Turkish => "turkish",
        }
    }

    fn snowball(&self) -> Option<Algorithm> {
        let algorithm = match self {
            Self::None => return None,
            Self::English => Algorithm::English,
            Self::Danish => Algorithm::Danish,
            Self::Dutch => Algorithm::Dutch,
            Self::Finnish => Algorithm::Finnish,
            Self::French => Algorithm::French,
            Self::German => Algorithm::German,
            Self::Hungarian => Algorithm::Hungarian,
            Self::Italian => Algorithm::Italian,
            Self::Norwegian => Algorithm::Norwegian,
            Self::Portuguese => Algorithm::Portuguese,
            Self::Romanian => Algorithm::Romanian,
            Self::Russian => Algorithm::Russian,
            Self::Spanish => Algorithm::Spanish,
            Self::Swedish => Algorithm::Swedish,
            Self::Turkish => Algorithm::Turkish,
        };
        Some(algorithm)
    }

    /// Instantiate the stemmer for this algorithm
    pub fn build(&self) -> Arc<dyn Stemmer> {
        match self.snowball() {
            Some(algorithm) => Arc::new(SnowballStemmer::new(*self, algorithm)),
            None => Arc::new(IdentityStemmer),
        }
    }
}

/// Snowball stemmer backed by `rust-stemmers`
pub struct SnowballStemmer {
    algorithm: StemmerAlgorithm,
    inner: rust_stemmers::Stemmer,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl SnowballStemmer {
    fn new(algorithm: StemmerAlgorithm, snowball: Algorithm) -> Self {
        Self {
            algorithm,
            inner: rust_stemmers::Stemmer::create(snowball),
        }
    }

    /// English (Porter2) stemmer
    pub fn english() -> Self {
        Self::new(StemmerAlgorithm::English, Algorithm::English)
    }

    /// Algorithm in use
    pub fn algorithm(&self) -> StemmerAlgorithm {
        self.algorithm
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }
}

/// Stemmer that returns every word unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

//! Stopword filtering

use std::collections::HashSet;

/// A set of function words excluded from importance weighting
///
/// Words are stored lowercase; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a word list
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words
                .iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Add words to the set
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().trim().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

//! Text collaborators: normalization, segmentation, stemming and stopwords

mod normalizer;
mod segmenter;
mod stemmer;
mod stopwords;

pub use normalizer::normalize;
pub use segmenter::{RuleSegmenter, Segmenter};
pub use stemmer::{IdentityStemmer, SnowballStemmer, Stemmer, StemmerAlgorithm};
pub use stopwords::StopwordSet;

/// Sentence terminator characters kept by normalization
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Word character: letters, digits and underscore
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `ch` ends a sentence
#[inline]
pub fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

/// A token made only of punctuation (no word characters)
pub fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(is_word_char)
}

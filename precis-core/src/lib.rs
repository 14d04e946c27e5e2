//! Explainable extractive summarization
//!
//! `precis-core` selects the most representative sentences of a document and
//! returns them in their original order. Every sentence is scored by a fixed
//! set of additive heuristics (stem frequency, position, length, numeric
//! content, capitalized words and emphasis), so each selection can be
//! explained term by term.
//!
//! # Example
//!
//! ```
//! use precis_core::Summarizer;
//!
//! let summarizer = Summarizer::new()?;
//! let summary = summarizer.summarize_with(
//!     "Rust guarantees memory safety. It has no garbage collector. \
//!      The compiler checks borrows. Memory safety matters.",
//!     0.5,
//!     2,
//! );
//!
//! assert_eq!(summary.sentences.len(), 2);
//! assert_eq!(summary.statistics.original_sentences, 4);
//! # Ok::<(), precis_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod profiler;
pub mod report;
pub mod scorer;
pub mod selector;
mod summarizer;
pub mod text;
pub mod types;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use language::{LanguageResources, BUILTIN_LANGUAGES};
pub use profiler::StemWeights;
pub use report::{Statistics, Summary};
pub use scorer::{
    HeuristicScorer, ScoreBreakdown, ScoringContext, ScoringWeights, SentenceScorer,
    TokenizedSentence,
};
pub use selector::{select, target_count};
pub use summarizer::{summarize, Summarizer, SummarizerBuilder};
pub use text::{RuleSegmenter, Segmenter, Stemmer, StemmerAlgorithm, StopwordSet};
pub use types::{ScoredSentence, Sentence};

//! Error types for summarizer construction and resource loading
//!
//! Summarizing itself never fails once a [`crate::Summarizer`] exists; every
//! variant here is raised while building one.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading resources or building a summarizer
#[derive(Error, Debug)]
pub enum Error {
    /// Language resources failed validation
    #[error("invalid language resources '{source_name}': {reason}")]
    Resource {
        /// Where the resources came from (file path or built-in name)
        source_name: String,
        /// Why they were rejected
        reason: String,
    },

    /// Language resources are not valid TOML for the expected schema
    #[error("failed to parse language resources: {0}")]
    ResourceParse(#[from] toml::de::Error),

    /// Resource file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The file that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A text pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration values are out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for fallible construction
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_display() {
        let err = Error::Resource {
            source_name: "english".to_string(),
            reason: "empty language code".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid language resources 'english': empty language code"
        );
    }

    #[test]
    fn test_pattern_error_conversion() {
        let regex_err = regex::Regex::new("[unclosed").unwrap_err();
        let err: Error = regex_err.into();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_parse_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: Error = toml_err.into();
        assert!(err.to_string().starts_with("failed to parse language resources"));
    }
}

//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input matched the given files or patterns
    NoInputFiles,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Input exceeds the configured size limit
    InputTooLarge {
        /// Input name
        source: String,
        /// Input size in KB
        size_kb: u64,
        /// Configured limit in KB
        limit_kb: u64,
    },
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles => write!(f, "No input files found"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InputTooLarge {
                source,
                size_kb,
                limit_kb,
            } => write!(
                f,
                "Input too large: {source} is {size_kb} KB (limit {limit_kb} KB)"
            ),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

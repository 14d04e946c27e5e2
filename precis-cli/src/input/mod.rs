//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Marker for reading from stdin
pub const STDIN_MARKER: &str = "-";

/// A document to summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole document, enforcing `limit_kb` (0 = unlimited)
    pub fn read(&self, limit_kb: u64) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let text = FileReader::read_stdin()?;
                FileReader::check_limit(&self.to_string(), text.len() as u64, limit_kb)?;
                Ok(text)
            }
            InputSource::File(path) => {
                let size = FileReader::file_size(path)?;
                FileReader::check_limit(&self.to_string(), size, limit_kb)?;
                FileReader::read_text(path)
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs; `-` selects stdin and is listed first
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<String>, Vec<String>) = inputs
        .iter()
        .cloned()
        .partition(|input| input == STDIN_MARKER);

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }
    sources.extend(
        resolve_patterns(&patterns)?
            .into_iter()
            .map(InputSource::File),
    );

    if sources.is_empty() {
        return Err(CliError::NoInputFiles.into());
    }

    Ok(sources)
}

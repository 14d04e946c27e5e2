//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation and a size limit
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of stdin as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Fail if `size_bytes` exceeds `limit_kb`; a limit of 0 disables the check
    pub fn check_limit(source: &str, size_bytes: u64, limit_kb: u64) -> Result<()> {
        if limit_kb > 0 && size_bytes > limit_kb * 1024 {
            return Err(CliError::InputTooLarge {
                source: source.to_string(),
                size_kb: size_bytes.div_ceil(1024),
                limit_kb,
            }
            .into());
        }

        Ok(())
    }
}

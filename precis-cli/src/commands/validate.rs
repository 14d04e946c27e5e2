//! Validate command implementation

use anyhow::Result;
use clap::Args;
use precis_core::LanguageResources;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language resource file to validate
    #[arg(short = 'r', long, value_name = "FILE", required = true)]
    pub resources: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language resources: {}",
            self.resources.display()
        );

        match LanguageResources::from_file(&self.resources) {
            Ok(resources) => {
                println!("✓ Resources are valid!");
                println!("  Language code: {}", resources.code());
                println!("  Language name: {}", resources.name());
                println!("  Stopwords: {}", resources.stopwords().len());
                println!("  Abbreviations: {}", resources.abbreviation_count());
                println!("  Stemmer: {}", resources.stemmer_algorithm().name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Resources are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_resources() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test Language"

[stemmer]
algorithm = "none"

[stopwords]
words = ["the", "a"]

[abbreviations]
titles = ["Dr"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            resources: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_unknown_stemmer() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test"

[stemmer]
algorithm = "klingon"

[stopwords]
words = ["the"]

[abbreviations]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            resources: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            resources: PathBuf::from("/nonexistent/resources.toml"),
        };

        assert!(args.execute().is_err());
    }
}

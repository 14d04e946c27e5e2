//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new resources
    #[arg(
        short = 'l',
        long,
        value_name = "CODE",
        default_value = "custom",
        value_parser = parse_language_code
    )]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Accept codes such as `en`, `pt-BR` or `x_custom`
fn parse_language_code(code: &str) -> Result<String, String> {
    if code.is_empty() {
        return Err("language code must not be empty".to_string());
    }
    match code.chars().find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_')) {
        Some(c) => Err(format!(
            "invalid character {c:?} (use ASCII letters, digits, '-' or '_')"
        )),
        None => Ok(code.to_string()),
    }
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language resource template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Resource template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the stopword and abbreviation lists for your language");
        println!("2. Validate your resources:");
        println!("   precis validate --resources {}", self.output.display());
        println!("3. Use them for summarizing:");
        println!(
            "   precis summarize -i input.txt --resources {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template resource content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language resources for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Stemming algorithm applied before counting word frequencies.
# One of: none, english, danish, dutch, finnish, french, german, hungarian,
# italian, norwegian, portuguese, romanian, russian, spanish, swedish, turkish
[stemmer]
algorithm = "none"

# Function words ignored when weighting sentences
[stopwords]
words = [
    "a", "an", "the", "and", "or", "but", "of", "to", "in", "on",
    "is", "are", "was", "were", "it", "this", "that",
]

# A single period after one of these words does not end a sentence.
# Each key below is a free-form group; all groups are merged on load.
# Write entries without the trailing period, matching is case-insensitive.
[abbreviations]
honorifics = ["Dr", "Mr", "Mrs", "Ms", "Prof"]
latin = ["etc", "vs", "e.g", "i.e"]

# After an abbreviation or initial, one of these words starts a new sentence.
# Case-sensitive, letters only.
[sentence_starters]
pronouns = ["I", "He", "She", "It", "We", "They"]
transitions = ["However", "Then", "The"]
"#,
            code = self.language_code
        )
    }
}

//! Output formatting module

use anyhow::Result;
use precis_core::Summary;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Summary of one input document
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    /// Input name (file path or `<stdin>`)
    pub source: String,
    /// The summary
    pub summary: Summary,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the summary of one document
    fn format_summary(&mut self, document: &DocumentSummary) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary paragraph per document
    #[default]
    Text,
    /// JSON array of summaries with sentences and statistics
    Json,
    /// Markdown section per document with a statistics table
    Markdown,
}

impl OutputFormat {
    /// Every format with a one-line description
    pub const ALL: &'static [(OutputFormat, &'static str)] = &[
        (OutputFormat::Text, "Summary paragraph, optional statistics lines"),
        (OutputFormat::Json, "JSON array of summaries with sentences and statistics"),
        (OutputFormat::Markdown, "Markdown section per document with a statistics table"),
    ];

    /// Format name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Rendering options shared by formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Append statistics to text output
    pub statistics: bool,
    /// Pretty-print JSON
    pub pretty_json: bool,
    /// Label each summary with its source
    pub show_source: bool,
}

/// Create the formatter for `format`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_match_value_enum() {
        use clap::ValueEnum;

        for (format, _) in OutputFormat::ALL {
            let parsed = OutputFormat::from_str(format.name(), true).unwrap();
            assert_eq!(parsed, *format);
        }
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let wrapper: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(wrapper.format, OutputFormat::Markdown);
    }
}

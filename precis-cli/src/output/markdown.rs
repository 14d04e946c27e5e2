//! Markdown output formatter

use super::{DocumentSummary, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs one section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_summary(&mut self, document: &DocumentSummary) -> Result<()> {
        let stats = &document.summary.statistics;
        self.documents += 1;

        writeln!(self.writer, "## {}", document.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", document.summary.text.trim())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Original | Summary |")?;
        writeln!(self.writer, "|--------|----------|---------|")?;
        writeln!(
            self.writer,
            "| Sentences | {} | {} |",
            stats.original_sentences, stats.summary_sentences
        )?;
        writeln!(
            self.writer,
            "| Words | {} | {} |",
            stats.original_words, stats.summary_words
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*Compression: {:.1}%*", stats.compression_ratio)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Documents summarized: {}*", self.documents)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::document;

    #[test]
    fn test_section_per_document() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_summary(&document("a.txt")).unwrap();
            formatter.format_summary(&document("b.txt")).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("## a.txt\n\nSolar power"));
        assert!(output.contains("## b.txt"));
        assert!(output.contains("| Sentences | 5 | 2 |"));
        assert!(output.contains("*Compression: "));
        assert!(output.ends_with("*Documents summarized: 2*\n"));
    }
}

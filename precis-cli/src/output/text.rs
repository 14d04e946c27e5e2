//! Plain text output formatter

use super::{DocumentSummary, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the summary paragraph of each document
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_summary(&mut self, document: &DocumentSummary) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        if self.options.show_source {
            writeln!(self.writer, "==> {} <==", document.source)?;
        }
        writeln!(self.writer, "{}", document.summary.text.trim())?;

        if self.options.statistics {
            let stats = &document.summary.statistics;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Sentences: {} -> {}",
                stats.original_sentences, stats.summary_sentences
            )?;
            writeln!(
                self.writer,
                "Words: {} -> {}",
                stats.original_words, stats.summary_words
            )?;
            writeln!(self.writer, "Compression: {:.1}%", stats.compression_ratio)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

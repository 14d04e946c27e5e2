//! JSON output formatter

use super::{DocumentSummary, OutputFormatter};
use anyhow::Result;
use precis_core::{Sentence, Statistics};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all summaries as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<SummaryRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Input name
    pub source: String,
    /// Summary text
    pub summary: String,
    /// Selected sentences in document order
    pub sentences: Vec<Sentence>,
    /// Compression statistics
    pub statistics: Statistics,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_summary(&mut self, document: &DocumentSummary) -> Result<()> {
        self.records.push(SummaryRecord {
            source: document.source.clone(),
            summary: document.summary.text.clone(),
            sentences: document.summary.sentences.clone(),
            statistics: document.summary.statistics,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

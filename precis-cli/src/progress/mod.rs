//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-document runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar; a single document gets none
    pub fn init_documents(&mut self, total: u64) {
        if self.quiet || total < 2 {
            return;
        }

        let pb = ProgressBar::new(total);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("progress template rejected: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a summarized document
    pub fn document_completed(&self, source: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Summarized: {}", source));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(10);
        assert!(!reporter.is_active());
        reporter.document_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_document_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_bar_counts_documents() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(2);
        assert!(reporter.is_active());

        reporter.document_completed("a.txt");
        reporter.document_completed("b.txt");
        reporter.finish();

        let pb = reporter.progress_bar.as_ref().unwrap();
        assert_eq!(pb.position(), 2);
    }
}

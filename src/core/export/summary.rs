//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Summary of one board export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Cards listed on the board
    pub cards: usize,

    /// Rows written, header excluded
    pub rows: usize,

    /// Cards exported as a single row without assignee
    pub cards_without_assignees: usize,

    /// Cells defaulted to empty after a failed extraction
    pub extraction_failures: usize,

    /// Destination of the export
    pub output_path: PathBuf,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create an empty summary for `output_path`
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            cards: 0,
            rows: 0,
            cards_without_assignees: 0,
            extraction_failures: 0,
            output_path: output_path.into(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether every field was extracted without masking
    pub fn is_clean(&self) -> bool {
        self.extraction_failures == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            cards = self.cards,
            rows = self.rows,
            cards_without_assignees = self.cards_without_assignees,
            extraction_failures = self.extraction_failures,
            output = %self.output_path.display(),
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        if !self.is_clean() {
            tracing::warn!(
                extraction_failures = self.extraction_failures,
                "Some fields were exported empty, see error events above"
            );
        }
    }
}

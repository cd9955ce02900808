use chrono::{DateTime, Utc};
use std::time::Duration;

/// Outcome of a single batch as reported to progress observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Standardized,
    Failed { reason: String },
}

/// Emitted after each batch completes
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Zero-based batch index
    pub index: usize,
    pub total: usize,
    pub len: usize,
    pub elapsed: Duration,
    pub outcome: BatchOutcome,
}

/// A batch whose names were replaced by the failure marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedBatch {
    pub index: usize,
    /// Zero-based data row indices the batch covered
    pub rows: Vec<usize>,
    pub reason: String,
}

/// Summary of one standardization run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub total_rows: usize,
    /// Rows with a non-blank source name
    pub submitted: usize,
    pub batches: usize,
    pub failed: Vec<FailedBatch>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn failed_rows(&self) -> usize {
        self.failed.iter().map(|f| f.rows.len()).sum()
    }

    pub fn standardized_rows(&self) -> usize {
        self.submitted - self.failed_rows()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

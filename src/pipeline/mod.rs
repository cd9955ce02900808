mod report;


pub use report::{BatchOutcome, BatchProgress, FailedBatch, RunReport};

use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

use crate::batcher::Batcher;
use crate::completion::CompletionService;
use crate::sheet::{Cell, DESIRED_COLUMN, EXISTING_COLUMN, NameTable, SheetError};
use crate::standardizer::{FAILURE_MARKER, Standardizer};

/// Drives a whole table through batching and standardization
pub struct Pipeline<C> {
    standardizer: Standardizer<C>,
    batcher: Batcher,
    existing_column: String,
    desired_column: String,
    failure_marker: String,
}

impl<C: CompletionService> Pipeline<C> {
    pub fn new(standardizer: Standardizer<C>, batcher: Batcher) -> Self {
        Self {
            standardizer,
            batcher,
            existing_column: EXISTING_COLUMN.to_string(),
            desired_column: DESIRED_COLUMN.to_string(),
            failure_marker: FAILURE_MARKER.to_string(),
        }
    }

    /// Override the source and destination column names
    pub fn columns(mut self, existing: impl Into<String>, desired: impl Into<String>) -> Self {
        self.existing_column = existing.into();
        self.desired_column = desired.into();
        self
    }

    pub fn failure_marker(mut self, marker: impl Into<String>) -> Self {
        self.failure_marker = marker.into();
        self
    }

    /// Check the table has both name columns without calling the model
    pub fn validate(&self, table: &NameTable) -> Result<(), SheetError> {
        table
            .name_columns(&self.existing_column, &self.desired_column)
            .map(|_| ())
    }

    pub fn run(&self, table: &mut NameTable) -> Result<RunReport, SheetError> {
        self.run_with_progress(table, |_| {})
    }

    /// Standardize every non-blank source name and write results into the
    /// destination column.
    ///
    /// Rows whose source name is blank are left untouched. A failed batch
    /// writes the failure marker into each of its rows and the run moves on.
    pub fn run_with_progress<F>(
        &self,
        table: &mut NameTable,
        mut on_batch: F,
    ) -> Result<RunReport, SheetError>
    where
        F: FnMut(&BatchProgress),
    {
        let started_at = Utc::now();
        let start = Instant::now();
        let cols = table.name_columns(&self.existing_column, &self.desired_column)?;

        let (rows, names): (Vec<usize>, Vec<String>) = table
            .column(cols.existing)
            .enumerate()
            .filter_map(|(row, cell)| cell.as_name().map(|name| (row, name)))
            .unzip();

        let batches = self.batcher.split(&names);
        let total = batches.len();
        info!(
            rows = table.row_count(),
            names = names.len(),
            batches = total,
            category = %self.standardizer.category(),
            "Starting standardization"
        );

        let mut results: Vec<String> = Vec::with_capacity(names.len());
        let mut failed = Vec::new();

        for (index, batch) in batches.into_iter().enumerate() {
            let batch_start = Instant::now();
            let offset = results.len();

            let outcome = match self.standardizer.standardize_batch(batch) {
                Ok(standardized) => {
                    results.extend(standardized);
                    BatchOutcome::Standardized
                }
                Err(e) => {
                    warn!(batch = index + 1, of = total, error = %e, "Batch failed");
                    results.extend(std::iter::repeat(self.failure_marker.clone()).take(batch.len()));
                    failed.push(FailedBatch {
                        index,
                        rows: rows[offset..offset + batch.len()].to_vec(),
                        reason: e.to_string(),
                    });
                    BatchOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            on_batch(&BatchProgress {
                index,
                total,
                len: batch.len(),
                elapsed: batch_start.elapsed(),
                outcome,
            });
        }

        debug_assert_eq!(results.len(), rows.len());
        for (row, name) in rows.iter().zip(results) {
            table.set_cell(*row, cols.desired, Cell::Text(name));
        }

        let report = RunReport {
            started_at,
            total_rows: table.row_count(),
            submitted: names.len(),
            batches: total,
            failed,
            elapsed: start.elapsed(),
        };
        info!(
            standardized = report.standardized_rows(),
            failed_batches = report.failed.len(),
            "Standardization complete"
        );

        Ok(report)
    }
}

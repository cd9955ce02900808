// Public API exports
pub mod batcher;
pub mod completion;
pub mod config;
pub mod pipeline;
pub mod sheet;
pub mod standardizer;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use batcher::{Batcher, DEFAULT_BATCH_SIZE};
pub use completion::{CompletionError, CompletionService, GeminiClient};
pub use config::{AppConfig, ConfigError, GeminiConfig, StandardizeConfig};
pub use pipeline::{BatchOutcome, BatchProgress, FailedBatch, Pipeline, RunReport};
pub use sheet::{
    Cell, DESIRED_COLUMN, EXISTING_COLUMN, NameTable, OUTPUT_FILE_NAME, SheetError, XLSX_MIME_TYPE,
    read_xlsx, read_xlsx_bytes, write_xlsx, write_xlsx_bytes,
};
pub use standardizer::{
    BatchError, Category, FAILURE_MARKER, ParseError, Standardizer, build_prompt,
    parse_numbered_list,
};

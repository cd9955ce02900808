use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    #[error("Failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    #[error("Workbook has no worksheets")]
    NoWorksheet,

    #[error("Worksheet has no header row")]
    NoHeader,

    #[error("The spreadsheet must have a '{column}' column (found: {})", .found.join(", "))]
    MissingColumn { column: String, found: Vec<String> },

    #[error("Failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("Table too large for a worksheet: {0}")]
    TooLarge(String),
}

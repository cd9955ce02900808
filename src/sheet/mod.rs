mod error;
mod reader;
mod table;
mod writer;

#[cfg(test)]
mod tests;

pub use error::SheetError;
pub use reader::{read_xlsx, read_xlsx_bytes};
pub use table::{Cell, NameColumns, NameTable, excel_datetime};
pub use writer::{write_xlsx, write_xlsx_bytes};

/// Source column holding the raw names
pub const EXISTING_COLUMN: &str = "ExistingName";

/// Destination column for standardized names
pub const DESIRED_COLUMN: &str = "DesireName";

/// File name offered for the annotated spreadsheet
pub const OUTPUT_FILE_NAME: &str = "standardized_output.xlsx";

pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

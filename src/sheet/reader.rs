use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

use super::{Cell, NameTable, SheetError};

/// Read the first worksheet of an `.xlsx` file; the first row is the header
pub fn read_xlsx(path: &Path) -> Result<NameTable, SheetError> {
    let workbook: Xlsx<_> = open_workbook(path).map_err(|source| SheetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_first_sheet(workbook)
}

/// Read an uploaded `.xlsx` held in memory
pub fn read_xlsx_bytes(bytes: &[u8]) -> Result<NameTable, SheetError> {
    let workbook = Xlsx::new(Cursor::new(bytes.to_vec()))?;
    read_first_sheet(workbook)
}

fn read_first_sheet<RS: Read + Seek>(mut workbook: Xlsx<RS>) -> Result<NameTable, SheetError> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)??;

    table_from_range(&range)
}

fn table_from_range(range: &Range<Data>) -> Result<NameTable, SheetError> {
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or(SheetError::NoHeader)?
        .iter()
        .map(|d| cell_from_data(d).to_string())
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SheetError::NoHeader);
    }

    let body: Vec<Vec<Cell>> = rows
        .map(|r| r.iter().map(cell_from_data).collect())
        .collect();

    debug!(columns = headers.len(), rows = body.len(), "read worksheet");
    Ok(NameTable::new(headers, body))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        other => Cell::Text(other.to_string()),
    }
}

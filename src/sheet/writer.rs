use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

use super::{Cell, NameTable, SheetError};

const DATE_TIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Write the table to an `.xlsx` file at `path`
pub fn write_xlsx(table: &NameTable, path: &Path) -> Result<(), SheetError> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    info!("Wrote {} rows to {:?}", table.row_count(), path);
    Ok(())
}

/// Render the table as `.xlsx` bytes (the download artifact)
pub fn write_xlsx_bytes(table: &NameTable) -> Result<Vec<u8>, SheetError> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(table: &NameTable) -> Result<Workbook, SheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    for (col, name) in table.headers().iter().enumerate() {
        worksheet.write_string_with_format(0, cast_col_num(col)?, name, &header_format)?;
    }

    let date_format = Format::new().set_num_format(DATE_TIME_FORMAT);
    for (idx, row) in table.rows().iter().enumerate() {
        let row_num = cast_row_num(idx + 1)?;
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_num, cast_col_num(col)?, cell, &date_format)?;
        }
    }

    Ok(workbook)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    date_format: &Format,
) -> Result<(), SheetError> {
    match cell {
        Cell::Empty => {}
        Cell::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Cell::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        Cell::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Cell::DateTime(n) => {
            worksheet.write_number_with_format(row, col, *n, date_format)?;
        }
    }
    Ok(())
}

fn cast_row_num(value: usize) -> Result<u32, SheetError> {
    u32::try_from(value).map_err(|_| SheetError::TooLarge(format!("row index overflow: {value}")))
}

fn cast_col_num(value: usize) -> Result<u16, SheetError> {
    u16::try_from(value)
        .map_err(|_| SheetError::TooLarge(format!("column index overflow: {value}")))
}

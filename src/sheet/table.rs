use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

use super::SheetError;

static EMPTY: Cell = Cell::Empty;

/// Serial of 10000-01-01, one past the last day Excel can hold
const MAX_EXCEL_SERIAL: f64 = 2_958_466.0;

/// Convert an Excel 1900-system serial to a date-time.
///
/// Serials before 60 sit ahead of Excel's phantom 1900-02-29 and use a
/// base one day later.
pub fn excel_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let base = if serial < 60.0 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let secs = (serial * 86_400.0).round() as i64;
    base.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::seconds(secs))
}

/// One spreadsheet cell value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel serial date-time
    DateTime(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// A cell is blank when empty or holding only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Cell content as a single-line name to standardize, or `None` when blank.
    ///
    /// Line breaks and runs of whitespace inside text collapse to one space.
    pub fn as_name(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        match self {
            Cell::Text(s) => Some(s.split_whitespace().collect::<Vec<_>>().join(" ")),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::DateTime(n) => match excel_datetime(*n) {
                Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
                None => write!(f, "{}", n),
            },
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Column positions of the source and destination name columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameColumns {
    pub existing: usize,
    pub desired: usize,
}

/// Header row plus rectangular data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl NameTable {
    /// Build a table; short rows are padded with empty cells, long rows truncated
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Locate both name columns, failing on the first one missing
    pub fn name_columns(&self, existing: &str, desired: &str) -> Result<NameColumns, SheetError> {
        let find = |name: &str| {
            self.column_index(name)
                .ok_or_else(|| SheetError::MissingColumn {
                    column: name.to_string(),
                    found: self.headers.clone(),
                })
        };

        Ok(NameColumns {
            existing: find(existing)?,
            desired: find(desired)?,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = value;
        }
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |r| r.get(col).unwrap_or(&EMPTY))
    }

    /// Plain-text rendering of the header and first `n` rows
    pub fn preview(&self, n: usize) -> String {
        let shown: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(n)
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &shown {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let render = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<width$}", c, width = *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = render(&self.headers);
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &shown {
            out.push('\n');
            out.push_str(&render(row));
        }
        out
    }
}

use super::*;

fn sample_table() -> NameTable {
    NameTable::new(
        vec![
            "Id".to_string(),
            EXISTING_COLUMN.to_string(),
            DESIRED_COLUMN.to_string(),
        ],
        vec![
            vec![Cell::Number(1.0), Cell::text("Coke"), Cell::Empty],
            vec![Cell::Number(2.0), Cell::text("Pepsi"), Cell::Empty],
            vec![Cell::Number(3.0), Cell::Empty, Cell::text("keep me")],
            vec![Cell::Number(4.0), Cell::text("Sprite")],
        ],
    )
}

#[test]
fn test_rows_are_padded_to_header_width() {
    let table = sample_table();
    assert_eq!(table.rows()[3].len(), 3);
    assert_eq!(table.cell(3, 2), Some(&Cell::Empty));
}

#[test]
fn test_name_columns_found() {
    let table = sample_table();
    let cols = table
        .name_columns(EXISTING_COLUMN, DESIRED_COLUMN)
        .unwrap();
    assert_eq!(cols, NameColumns { existing: 1, desired: 2 });
}

#[test]
fn test_missing_desired_column() {
    let table = NameTable::new(
        vec![EXISTING_COLUMN.to_string()],
        vec![vec![Cell::text("Coke")]],
    );

    match table.name_columns(EXISTING_COLUMN, DESIRED_COLUMN) {
        Err(SheetError::MissingColumn { column, found }) => {
            assert_eq!(column, DESIRED_COLUMN);
            assert_eq!(found, vec![EXISTING_COLUMN.to_string()]);
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_header_match_ignores_padding() {
    let table = NameTable::new(vec![" ExistingName ".to_string()], vec![]);
    assert_eq!(table.column_index(EXISTING_COLUMN), Some(0));
}

#[test]
fn test_blank_cells() {
    assert!(Cell::Empty.is_blank());
    assert!(Cell::text("   ").is_blank());
    assert!(!Cell::text(" x ").is_blank());
    assert!(!Cell::Number(0.0).is_blank());

    assert_eq!(Cell::text("  Coke ").as_name(), Some("Coke".to_string()));
    assert_eq!(Cell::Number(7.0).as_name(), Some("7".to_string()));
    assert_eq!(Cell::Number(7.5).as_name(), Some("7.5".to_string()));
    assert_eq!(Cell::Bool(true).as_name(), Some("true".to_string()));
    assert_eq!(Cell::text("").as_name(), None);
}

#[test]
fn test_multiline_text_becomes_one_line_name() {
    assert_eq!(
        Cell::text("Coca\nCola").as_name(),
        Some("Coca Cola".to_string())
    );
    assert_eq!(
        Cell::text(" Dr.\r\n  Pepper\t Zero ").as_name(),
        Some("Dr. Pepper Zero".to_string())
    );
}

#[test]
fn test_date_cells_render_as_timestamps() {
    assert_eq!(
        Cell::DateTime(45123.0).as_name(),
        Some("2023-07-16 00:00:00".to_string())
    );
    assert_eq!(Cell::DateTime(45123.5).to_string(), "2023-07-16 12:00:00");
    assert_eq!(Cell::DateTime(1.0).to_string(), "1900-01-01 00:00:00");
    assert_eq!(excel_datetime(-1.0), None);
    assert_eq!(Cell::DateTime(f64::NAN).to_string(), "NaN");
}

#[test]
fn test_set_cell_out_of_range_is_ignored() {
    let mut table = sample_table();
    table.set_cell(99, 0, Cell::text("x"));
    table.set_cell(0, 99, Cell::text("x"));
    assert_eq!(table, sample_table());
}

#[test]
fn test_preview_shows_header_and_rows() {
    let preview = sample_table().preview(2);
    let lines: Vec<&str> = preview.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Id | ExistingName | DesireName"));
    assert!(lines[2].contains("Coke"));
    assert!(lines[3].contains("Pepsi"));
    assert!(!preview.contains("Sprite"));
}

#[test]
fn test_xlsx_buffer_round_trip() {
    let table = sample_table();

    let bytes = write_xlsx_bytes(&table).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let read = read_xlsx_bytes(&bytes).unwrap();
    assert_eq!(read.headers(), table.headers());
    assert_eq!(read.row_count(), 4);
    assert_eq!(read.cell(0, 1), Some(&Cell::text("Coke")));
    assert_eq!(read.cell(2, 1), Some(&Cell::Empty));
    assert_eq!(read.cell(2, 2), Some(&Cell::text("keep me")));
    assert_eq!(read.cell(3, 0), Some(&Cell::Number(4.0)));
}

#[test]
fn test_xlsx_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);

    write_xlsx(&sample_table(), &path).unwrap();
    let read = read_xlsx(&path).unwrap();

    let names: Vec<Option<String>> = read.column(1).map(Cell::as_name).collect();
    assert_eq!(
        names,
        vec![
            Some("Coke".to_string()),
            Some("Pepsi".to_string()),
            None,
            Some("Sprite".to_string())
        ]
    );
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_xlsx(&dir.path().join("nope.xlsx"));
    assert!(matches!(result, Err(SheetError::Open { .. })));
}

#[test]
fn test_read_garbage_bytes() {
    let result = read_xlsx_bytes(b"not a spreadsheet");
    assert!(result.is_err());
}

#[test]
fn test_mime_type() {
    assert_eq!(
        XLSX_MIME_TYPE,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

/*!
 * Tests for workbook loading functionality
 */

use yaxt::errors::WorkbookError;
use yaxt::workbook::{load_workbook, CellValue};

use crate::common::{create_temp_dir, create_test_workbook};

/// Test loading a well-formed two-sheet workbook
#[test]
fn test_loadWorkbook_withTwoSheets_shouldSplitIntoTables() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_workbook(
        temp_dir.path(),
        "input.xlsx",
        &[
            &["Item", "Desc (sk)", "Desc (en)"],
            &["a", "stôl", "table"],
            &["b", "okno", ""],
        ],
        &[&["Key", "Value"], &["mode", "fast"]],
    )
    .unwrap();

    let document = load_workbook(&path).unwrap();

    assert_eq!(
        document.translations.columns,
        vec!["Item", "Desc (sk)", "Desc (en)"]
    );
    assert_eq!(document.translations.row_count(), 2);
    assert_eq!(document.translations.cell(0, 1).as_text(), "stôl");
    assert_eq!(document.translations.cell(1, 2), &CellValue::Empty);

    assert_eq!(document.configuration.columns, vec!["Key", "Value"]);
    assert_eq!(document.configuration.row_count(), 1);
    assert_eq!(document.configuration.cell(0, 0).as_text(), "mode");
}

/// Test that a single-sheet workbook is rejected
#[test]
fn test_loadWorkbook_withSingleSheet_shouldReturnMissingSheetsError() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("single.xlsx");

    let mut book = umya_spreadsheet::new_file();
    if let Some(sheet) = book.get_sheet_mut(&0) {
        sheet.get_cell_mut((1, 1)).set_value("only one sheet");
    }
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

    let result = load_workbook(&path);
    assert!(matches!(result, Err(WorkbookError::MissingSheets(1))));
}

/// Test that an empty translation sheet is rejected
#[test]
fn test_loadWorkbook_withEmptyFirstSheet_shouldReturnEmptySheetError() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_workbook(
        temp_dir.path(),
        "empty.xlsx",
        &[],
        &[&["Key"], &["value"]],
    )
    .unwrap();

    let result = load_workbook(&path);
    assert!(matches!(result, Err(WorkbookError::EmptySheet)));
}

/// Test loading a path that does not exist
#[test]
fn test_loadWorkbook_withMissingFile_shouldReturnUnreadableError() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("does-not-exist.xlsx");

    let result = load_workbook(&path);
    assert!(matches!(result, Err(WorkbookError::Unreadable(_))));
}

/// Test duplicate header mangling on load
#[test]
fn test_loadWorkbook_withDuplicateHeaders_shouldMangleNames() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_workbook(
        temp_dir.path(),
        "dupes.xlsx",
        &[
            &["Desc (sk)", "Desc (sk)", "Other"],
            &["a", "b", "c"],
        ],
        &[&["Key"], &["v"]],
    )
    .unwrap();

    let document = load_workbook(&path).unwrap();
    assert_eq!(
        document.translations.columns,
        vec!["Desc (sk)", "Desc (sk).1", "Other"]
    );
}

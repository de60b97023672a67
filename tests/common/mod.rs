/*!
 * Common test utilities for the yaxt test suite
 */

use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use yaxt::workbook::{CellValue, SheetTable};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Shorthand for a text cell
pub fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

/// Build an in-memory table from string headers and string rows; empty
/// strings become empty cells.
pub fn table(headers: &[&str], rows: &[&[&str]]) -> SheetTable {
    let mut table = SheetTable::new(headers.iter().map(|h| h.to_string()).collect());
    for row in rows {
        table.push_row(
            row.iter()
                .map(|value| {
                    if value.is_empty() {
                        CellValue::Empty
                    } else {
                        text(value)
                    }
                })
                .collect(),
        );
    }
    table
}

/// Write a two-sheet workbook fixture with the given sheet contents.
/// The first row of each sheet is the header row.
pub fn create_test_workbook(
    dir: &Path,
    filename: &str,
    translation_sheet: &[&[&str]],
    configuration_sheet: &[&[&str]],
) -> Result<PathBuf> {
    let path = dir.join(filename);
    let mut book = umya_spreadsheet::new_file();

    if let Some(sheet) = book.get_sheet_mut(&0) {
        sheet.set_name("Sheet1");
    }
    fill_fixture_sheet(&mut book, "Sheet1", translation_sheet)?;
    book.new_sheet("Sheet2")
        .map_err(|e| anyhow::anyhow!("Failed to create sheet: {}", e))?;
    fill_fixture_sheet(&mut book, "Sheet2", configuration_sheet)?;

    umya_spreadsheet::writer::xlsx::write(&book, &path)?;
    Ok(path)
}

fn fill_fixture_sheet(
    book: &mut umya_spreadsheet::Spreadsheet,
    name: &str,
    rows: &[&[&str]],
) -> Result<()> {
    let sheet = book
        .get_sheet_by_name_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Fixture sheet missing: {}", name))?;

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            sheet
                .get_cell_mut(((col_index + 1) as u32, (row_index + 1) as u32))
                .set_value(*value);
        }
    }
    Ok(())
}

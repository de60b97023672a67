use std::path::Path;
use log::{debug, warn};
use umya_spreadsheet::{Worksheet, writer};

use crate::app_config::StyleConfig;
use crate::errors::WorkbookError;
use crate::translation_service::CellFlags;
use crate::workbook::{CellValue, SheetTable};

// @module: Output workbook assembly and styling

/// Sheet name of the translated table in the output artifact
pub const TRANSLATIONS_SHEET: &str = "Translations";

/// Sheet name of the pass-through configuration table
pub const CONFIGURATION_SHEET: &str = "Configuration";

// Data rows start below the single header row
const HEADER_ROW_OFFSET: u32 = 2;

/// Serialize the translated table and the untouched configuration table
/// into one workbook, apply the uniform font to every populated cell, set
/// column widths on the translations sheet, and give flagged cells the
/// bold alert font. Any failure here aborts the run; no partial artifact
/// is left behind on disk.
pub fn write_workbook(
    translations: &SheetTable,
    configuration: &SheetTable,
    flags: &CellFlags,
    style: &StyleConfig,
    path: &Path,
) -> Result<(), WorkbookError> {
    let mut book = umya_spreadsheet::new_file();

    // new_file() seeds one sheet; rename it instead of leaving it dangling
    if let Some(sheet) = book.get_sheet_mut(&0) {
        sheet.set_name(TRANSLATIONS_SHEET);
    }
    book.new_sheet(CONFIGURATION_SHEET)
        .map_err(|e| WorkbookError::WriteFailed(e.to_string()))?;

    let translations_sheet = book
        .get_sheet_by_name_mut(TRANSLATIONS_SHEET)
        .ok_or_else(|| WorkbookError::WriteFailed("Translations sheet missing".to_string()))?;
    fill_sheet(translations_sheet, translations, style);
    set_column_widths(translations_sheet, translations.column_count(), style);
    apply_flags(translations_sheet, translations, flags, style);

    let configuration_sheet = book
        .get_sheet_by_name_mut(CONFIGURATION_SHEET)
        .ok_or_else(|| WorkbookError::WriteFailed("Configuration sheet missing".to_string()))?;
    fill_sheet(configuration_sheet, configuration, style);

    writer::xlsx::write(&book, path).map_err(|e| WorkbookError::WriteFailed(e.to_string()))?;
    debug!("Workbook written to {:?}", path);
    Ok(())
}

/// Write the header row and data rows, applying the uniform font to every
/// populated cell as it is written.
fn fill_sheet(sheet: &mut Worksheet, table: &SheetTable, style: &StyleConfig) {
    for (col, name) in table.columns.iter().enumerate() {
        let coordinate = ((col + 1) as u32, 1u32);
        let cell = sheet.get_cell_mut(coordinate);
        cell.set_value(name);
        if !name.is_empty() {
            apply_uniform_font(sheet, coordinate, style);
        }
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            let coordinate = ((col + 1) as u32, row_index as u32 + HEADER_ROW_OFFSET);
            match value {
                CellValue::Empty => continue,
                CellValue::Text(s) => {
                    sheet.get_cell_mut(coordinate).set_value(s);
                }
                CellValue::Number(n) => {
                    sheet.get_cell_mut(coordinate).set_value_number(*n);
                }
            }
            apply_uniform_font(sheet, coordinate, style);
        }
    }
}

fn apply_uniform_font(sheet: &mut Worksheet, coordinate: (u32, u32), style: &StyleConfig) {
    let font = sheet.get_cell_mut(coordinate).get_style_mut().get_font_mut();
    font.set_name(style.font_name.clone());
    font.set_size(style.font_size);
}

/// First column is an internal index artifact and gets collapsed; every
/// other column gets the wide display width. Widths apply only to the
/// translations sheet, matching the original layout.
fn set_column_widths(sheet: &mut Worksheet, column_count: usize, style: &StyleConfig) {
    for col in 0..column_count {
        let letter = column_letter(col);
        let width = if col == 0 {
            style.index_column_width
        } else {
            style.column_width
        };
        sheet.get_column_dimension_mut(&letter).set_width(width);
    }
}

/// Override the font of every flagged cell with the bold alert style. This
/// runs after the uniform pass so the alert style wins.
fn apply_flags(sheet: &mut Worksheet, table: &SheetTable, flags: &CellFlags, style: &StyleConfig) {
    for (row, column_name) in flags {
        let Some(col) = table.column_index(column_name) else {
            warn!("Flag refers to unknown column '{}', skipping", column_name);
            continue;
        };
        let coordinate = ((col + 1) as u32, *row as u32 + HEADER_ROW_OFFSET);
        let font = sheet.get_cell_mut(coordinate).get_style_mut().get_font_mut();
        font.set_bold(true);
        font.get_color_mut().set_argb(alert_argb(&style.alert_color));
    }
}

/// Accept both "FF0000" and "FFFF0000" color notations in config
fn alert_argb(color: &str) -> String {
    if color.len() == 6 {
        format!("FF{}", color)
    } else {
        color.to_string()
    }
}

/// Convert a 0-based column index to a spreadsheet column letter
fn column_letter(index: usize) -> String {
    let mut result = String::new();
    let mut n = index + 1;

    while n > 0 {
        n -= 1;
        let c = (b'A' + (n % 26) as u8) as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

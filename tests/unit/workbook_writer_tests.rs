/*!
 * Tests for output workbook assembly
 */

use calamine::{open_workbook_auto, Reader};

use yaxt::app_config::StyleConfig;
use yaxt::translation_service::CellFlags;
use yaxt::workbook::{load_workbook, CellValue, SheetTable};
use yaxt::workbook_writer::{write_workbook, CONFIGURATION_SHEET, TRANSLATIONS_SHEET};

use crate::common::{create_temp_dir, table};

/// Test sheet naming in the written artifact
#[test]
fn test_writeWorkbook_shouldNameSheetsByRole() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    let translations = table(&["Item", "Desc (sk)"], &[&["a", "stôl"]]);
    let configuration = table(&["Key", "Value"], &[&["mode", "fast"]]);

    write_workbook(
        &translations,
        &configuration,
        &CellFlags::new(),
        &StyleConfig::default(),
        &path,
    )
    .unwrap();

    let workbook = open_workbook_auto(&path).unwrap();
    assert_eq!(
        workbook.sheet_names().to_vec(),
        vec![TRANSLATIONS_SHEET, CONFIGURATION_SHEET]
    );
}

/// Test that written content survives a reload
#[test]
fn test_writeWorkbook_shouldRoundTripCellContent() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    let mut translations = table(
        &["Item", "Desc (sk)", "Translation (en)"],
        &[
            &["a", "stôl", "[en] stôl"],
            &["b", "", "[en]"],
        ],
    );
    translations.set_cell(1, 0, CellValue::Number(42.0));
    let configuration = table(&["Key", "Value"], &[&["mode", "fast"], &["limit", ""]]);

    write_workbook(
        &translations,
        &configuration,
        &CellFlags::new(),
        &StyleConfig::default(),
        &path,
    )
    .unwrap();

    let document = load_workbook(&path).unwrap();
    assert_eq!(document.translations.columns, translations.columns);
    assert_eq!(document.translations.cell(0, 1).as_text(), "stôl");
    assert_eq!(document.translations.cell(0, 2).as_text(), "[en] stôl");
    assert_eq!(document.translations.cell(1, 0), &CellValue::Number(42.0));
    assert_eq!(document.translations.cell(1, 1), &CellValue::Empty);

    // Configuration sheet content is carried through unmodified
    assert_eq!(document.configuration.columns, configuration.columns);
    assert_eq!(document.configuration.cell(0, 0).as_text(), "mode");
    assert_eq!(document.configuration.cell(0, 1).as_text(), "fast");
    assert_eq!(document.configuration.cell(1, 1), &CellValue::Empty);
}

/// Test that a flag on an unknown column is skipped, not fatal
#[test]
fn test_writeWorkbook_withUnknownFlagColumn_shouldSkipFlag() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    let translations = table(&["Desc (sk)"], &[&["stôl"]]);
    let mut flags = CellFlags::new();
    flags.insert((0, "No Such Column".to_string()));

    let result = write_workbook(
        &translations,
        &SheetTable::new(Vec::new()),
        &flags,
        &StyleConfig::default(),
        &path,
    );
    assert!(result.is_ok());
}

/// Test that flag styling does not disturb the written content
#[test]
fn test_writeWorkbook_withFlaggedCell_shouldKeepCellContentIntact() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    let translations = table(
        &["Desc (sk)", "Translation (en)"],
        &[&["stôl", "rama okna"], &["okno", "[en] okno"]],
    );
    let mut flags = CellFlags::new();
    flags.insert((0, "Translation (en)".to_string()));

    write_workbook(
        &translations,
        &table(&["Key"], &[]),
        &flags,
        &StyleConfig::default(),
        &path,
    )
    .unwrap();

    let document = load_workbook(&path).unwrap();
    assert_eq!(document.translations.cell(0, 1).as_text(), "rama okna");
    assert_eq!(document.translations.cell(1, 1).as_text(), "[en] okno");
}

/// Test that a custom style configuration is accepted
#[test]
fn test_writeWorkbook_withCustomStyle_shouldSucceed() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("out.xlsx");

    let translations = table(&["Item", "Desc (sk)", "Translation (en)"], &[&["a", "b", "c"]]);
    let style = StyleConfig {
        font_name: "Calibri".to_string(),
        font_size: 12.0,
        alert_color: "FFFF0000".to_string(),
        column_width: 40.0,
        index_column_width: 2.0,
    };

    write_workbook(
        &translations,
        &table(&["Key"], &[]),
        &CellFlags::new(),
        &style,
        &path,
    )
    .unwrap();

    let document = load_workbook(&path).unwrap();
    assert_eq!(document.translations.columns, translations.columns);
}

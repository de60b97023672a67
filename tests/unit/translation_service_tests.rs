/*!
 * Tests for translation service functionality
 */

use yaxt::app_config::FlaggingConfig;
use yaxt::providers::mock::MockProvider;
use yaxt::translation_service::{new_column_name, TranslationService, ERROR_MARKER_PREFIX};
use yaxt::workbook::CellValue;

use crate::common::table;

fn targets(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// Test basic single-text translation through the mock provider
#[tokio::test]
async fn test_translateText_withWorkingProvider_shouldReturnTranslation() {
    let service = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());

    let result = service.translate_text("stôl", "sk", "en").await.unwrap();
    assert_eq!(result, "[en] stôl");
}

/// Test that a missing source column aborts the run
#[tokio::test]
async fn test_translateTable_withUnknownSourceColumn_shouldFail() {
    let service = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());
    let input = table(&["Desc (sk)"], &[&["stôl"]]);

    let result = service
        .translate_table(&input, "Nope (sk)", "sk", &targets(&["en"]), None)
        .await;
    assert!(result.is_err());
}

/// Test destination column creation for a missing target language
#[tokio::test]
async fn test_translateTable_withMissingDestination_shouldCreateColumnOnce() {
    let service = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());
    let input = table(&["Item", "Desc (sk)"], &[&["a", "stôl"], &["b", "okno"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en"]), None)
        .await
        .unwrap();

    // Exactly one new column, appended at the end
    assert_eq!(translated.table.column_count(), 3);
    assert_eq!(translated.table.columns[2], new_column_name("en"));

    let en = translated.table.column_index("Translation (en)").unwrap();
    assert_eq!(translated.table.cell(0, en).as_text(), "[en] stôl");
    assert_eq!(translated.table.cell(1, en).as_text(), "[en] okno");

    // Source column is untouched
    let sk = translated.table.column_index("Desc (sk)").unwrap();
    assert_eq!(translated.table.cell(0, sk).as_text(), "stôl");
    assert!(translated.flags.is_empty());
}

/// Test case-insensitive reuse of an existing destination column
#[tokio::test]
async fn test_translateTable_withExistingDestination_shouldReuseColumn() {
    let service = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());
    let input = table(
        &["Desc (sk)", "Popis (EN)"],
        &[&["stôl", "old value"]],
    );

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en"]), None)
        .await
        .unwrap();

    // No new column; the existing one is overwritten
    assert_eq!(translated.table.column_count(), 2);
    let en = translated.table.column_index("Popis (EN)").unwrap();
    assert_eq!(translated.table.cell(0, en).as_text(), "[en] stôl");
}

/// Test that running twice keeps the column set stable
#[tokio::test]
async fn test_translateTable_runTwice_shouldNotDuplicateColumns() {
    let service = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());
    let input = table(&["Desc (sk)"], &[&["stôl"]]);

    let first = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en", "de"]), None)
        .await
        .unwrap();
    let second = service
        .translate_table(&first.table, "Desc (sk)", "sk", &targets(&["en", "de"]), None)
        .await
        .unwrap();

    assert_eq!(first.table.columns, second.table.columns);
    assert_eq!(second.table.column_count(), 3);
}

/// Test that empty source cells translate to empty cells, not errors
#[tokio::test]
async fn test_translateTable_withEmptySourceCell_shouldWriteEmptyText() {
    let mock = MockProvider::working();
    let counter = mock.clone();
    let service = TranslationService::with_mock(mock, FlaggingConfig::default());
    let input = table(&["Desc (sk)"], &[&["stôl"], &[""], &["okno"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en"]), None)
        .await
        .unwrap();

    let en = translated.table.column_index("Translation (en)").unwrap();
    assert_eq!(translated.table.cell(1, en), &CellValue::Text(String::new()));
    assert!(translated.flags.is_empty());

    // The empty row still goes through the provider, one call per cell
    assert_eq!(counter.request_count(), 3);
}

/// Test error containment: a failed call marks its cell and the run goes on
#[tokio::test]
async fn test_translateTable_withFailingRow_shouldContainErrorInCell() {
    let service = TranslationService::with_mock(
        MockProvider::fail_on_match("okno"),
        FlaggingConfig::default(),
    );
    let input = table(&["Desc (sk)"], &[&["stôl"], &["okno"], &["dvere"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en"]), None)
        .await
        .unwrap();

    let en = translated.table.column_index("Translation (en)").unwrap();
    assert_eq!(translated.table.cell(0, en).as_text(), "[en] stôl");
    assert!(translated
        .table
        .cell(1, en)
        .as_text()
        .starts_with(ERROR_MARKER_PREFIX));
    assert_eq!(translated.table.cell(2, en).as_text(), "[en] dvere");

    // Only the failed cell is flagged
    assert_eq!(translated.flags.len(), 1);
    assert!(translated.flags.contains(&(1, "Translation (en)".to_string())));
}

/// Test suspicious word flagging on successful translations
#[tokio::test]
async fn test_translateTable_withSuspiciousOutput_shouldFlagCell() {
    let mock = MockProvider::working()
        .with_custom_response(|req| format!("RAMA okna: {}", req.text));
    let service = TranslationService::with_mock(mock, FlaggingConfig::default());
    let input = table(&["Desc (sk)"], &[&["stôl"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en"]), None)
        .await
        .unwrap();

    // "RAMA" matches the "rama" word case-insensitively
    assert!(translated.flags.contains(&(0, "Translation (en)".to_string())));
    let en = translated.table.column_index("Translation (en)").unwrap();
    assert_eq!(translated.table.cell(0, en).as_text(), "RAMA okna: stôl");
}

/// Test that a custom word list replaces the default one
#[tokio::test]
async fn test_translateTable_withCustomWordList_shouldUseConfiguredWords() {
    let mock = MockProvider::working().with_custom_response(|_| "rama everywhere".to_string());
    let flagging = FlaggingConfig {
        suspicious_words: vec!["banana".to_string()],
    };
    let service = TranslationService::with_mock(mock, flagging);
    let input = table(&["Desc (sk)"], &[&["stôl"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en"]), None)
        .await
        .unwrap();

    assert!(translated.flags.is_empty());
}

/// Test processing order: rows outer, targets inner
#[tokio::test]
async fn test_translateTable_withMultipleTargets_shouldFillAllDestinations() {
    let service = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());
    let input = table(&["Desc (sk)"], &[&["stôl"], &["okno"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &targets(&["en", "de"]), None)
        .await
        .unwrap();

    let en = translated.table.column_index("Translation (en)").unwrap();
    let de = translated.table.column_index("Translation (de)").unwrap();
    assert_eq!(translated.table.cell(0, en).as_text(), "[en] stôl");
    assert_eq!(translated.table.cell(0, de).as_text(), "[de] stôl");
    assert_eq!(translated.table.cell(1, en).as_text(), "[en] okno");
    assert_eq!(translated.table.cell(1, de).as_text(), "[de] okno");
}

/// Test that no target languages means a plain copy
#[tokio::test]
async fn test_translateTable_withNoTargets_shouldReturnUnmodifiedCopy() {
    let mock = MockProvider::working();
    let counter = mock.clone();
    let service = TranslationService::with_mock(mock, FlaggingConfig::default());
    let input = table(&["Desc (sk)"], &[&["stôl"]]);

    let translated = service
        .translate_table(&input, "Desc (sk)", "sk", &[], None)
        .await
        .unwrap();

    assert_eq!(translated.table, input);
    assert!(translated.flags.is_empty());
    assert_eq!(counter.request_count(), 0);
}

/// Test connection probing through the service
#[tokio::test]
async fn test_testConnection_withFailingProvider_shouldReturnError() {
    let ok = TranslationService::with_mock(MockProvider::working(), FlaggingConfig::default());
    assert!(ok.test_connection().await.is_ok());

    let broken = TranslationService::with_mock(MockProvider::failing(), FlaggingConfig::default());
    assert!(broken.test_connection().await.is_err());
}

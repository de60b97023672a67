/*!
 * # YAXT - Yet Another XLSX Translator
 *
 * A Rust library for batch translation of spreadsheet columns.
 *
 * ## Features
 *
 * - Read two-sheet workbooks (.xlsx and legacy .xls)
 * - Auto-detect the source language column from `<label> (<code>)` headers
 * - Translate the source column into any number of target languages:
 *   - Google translate web endpoint
 *   - LibreTranslate API
 * - Flag suspicious or failed translations for review
 * - Write a styled output workbook with the configuration sheet untouched
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `workbook`: Workbook loading and the tabular data model
 * - `column_detector`: Language column detection heuristics
 * - `translation_service`: The translate-and-flag engine
 * - `workbook_writer`: Output workbook assembly and styling
 * - `app_controller`: Main application controller
 * - `language_utils`: Language code utilities
 * - `locales`: UI label strings (sk, en, de)
 * - `providers`: Client implementations for translation services
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod column_detector;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod locales;
pub mod providers;
pub mod translation_service;
pub mod workbook;
pub mod workbook_writer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use column_detector::{ColumnDetection, detect_columns, language_code};
pub use translation_service::{TranslationService, TranslatedTable, CellFlags};
pub use workbook::{CellValue, SheetTable, WorkbookDocument, load_workbook};
pub use errors::{AppError, ProviderError, TranslationError, WorkbookError};

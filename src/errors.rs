/*!
 * Error types for the yaxt application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while reading or writing spreadsheet files
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The uploaded file could not be parsed at all
    #[error("Failed to read workbook: {0}")]
    Unreadable(String),

    /// The workbook does not carry the expected sheets
    #[error("Workbook must contain at least two sheets (translations + configuration), found {0}")]
    MissingSheets(usize),

    /// The translation sheet carries no usable data
    #[error("Translation sheet is empty")]
    EmptySheet,

    /// A column lookup by name failed
    #[error("No such column: {0}")]
    UnknownColumn(String),

    /// Error while assembling the output workbook
    #[error("Failed to write workbook: {0}")]
    WriteFailed(String),
}

/// Errors that can occur during the translation run
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error with the table being translated
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from spreadsheet processing
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

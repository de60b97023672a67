use anyhow::{Result, Context, anyhow};
use std::fs;
use std::path::Path;

// @module: File system helpers

/// Fixed default name for the output artifact
pub const DEFAULT_OUTPUT_FILENAME: &str = "preklad.xlsx";

/// MIME type of the output artifact (modern spreadsheet document)
pub const OUTPUT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Supported input file kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    /// Modern spreadsheet format (.xlsx)
    Xlsx,
    /// Legacy spreadsheet format (.xls)
    Xls,
    /// Anything else
    Unknown,
}

/// File manager for basic file system operations
pub struct FileManager;

impl FileManager {
    /// Classify an input file by its extension
    pub fn detect_file_type(path: &Path) -> FileType {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("xlsx") => FileType::Xlsx,
            Some("xls") => FileType::Xls,
            _ => FileType::Unknown,
        }
    }

    /// Check that an input path exists and looks like a spreadsheet
    pub fn validate_input(path: &Path) -> Result<FileType> {
        if !path.is_file() {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }
        match Self::detect_file_type(path) {
            FileType::Unknown => Err(anyhow!(
                "Unsupported input file (expected .xlsx or .xls): {:?}",
                path
            )),
            file_type => Ok(file_type),
        }
    }

    /// Ensure a directory exists, creating it if needed
    pub fn ensure_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }
}

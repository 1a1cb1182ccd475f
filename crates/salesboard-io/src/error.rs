//! Error types for ingestion and export.

use std::path::PathBuf;

/// Result type for ingestion and export operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while reading uploads or writing exports.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file is neither structured text nor a spreadsheet.
    #[error("Unsupported file format for {path}: expected .csv, .json, .jsonl or a spreadsheet (.xlsx, .xls, .ods)")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to read source file.
    #[error("Failed to read file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be opened or has no readable sheet.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed, but not shaped like a table of rows.
    #[error("Invalid input shape: {0}")]
    InvalidShape(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

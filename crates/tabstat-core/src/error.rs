use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across Tabstat crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset file does not exist.
    #[error("data file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// The file extension maps to no known parser.
    #[error("unsupported data format '{extension}' (expected csv, xls or xlsx)")]
    UnsupportedFormat { extension: String },
    /// The requested column is absent from the dataset header.
    #[error("column '{column}' not found; available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    /// The requested column holds values that do not parse as numbers.
    #[error("column '{column}' is not numeric (first offending value: '{value}')")]
    NonNumericColumn { column: String, value: String },
    /// The requested column has no non-missing values.
    #[error("column '{column}' has no values")]
    EmptyColumn { column: String },
    /// The requested worksheet is absent from the workbook.
    #[error("worksheet '{sheet}' not found; available sheets: {}", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    /// The file parsed but its contents are unusable.
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

/// Convenience alias for results returned by Tabstat crates.
pub type Result<T> = std::result::Result<T, Error>;

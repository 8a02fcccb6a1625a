//! Error types for export operations.

use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors that can occur while exporting the merged table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export requested before any merge.
    #[error("no data to save")]
    NothingMerged,

    /// Destination could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited writer failed.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook writer failed.
    #[error("failed to write workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },

    /// Table does not fit on a single worksheet.
    #[error("{rows} rows x {columns} columns exceeds the worksheet limits")]
    SheetTooLarge { rows: usize, columns: usize },

    /// Failed reading a cell from the table.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ExportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

//! Error types for report generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Report requested before a merged table exists.
    #[error("no merged data available, merge the sources first")]
    NotMerged,

    /// Merged table lacks a column the chart needs.
    #[error("merged data has no '{column}' column")]
    MissingColumn { column: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

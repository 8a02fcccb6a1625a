//! Export of the merged table.
//!
//! The destination's extension picks the format: `.xlsx` (any case) writes a
//! workbook, anything else writes comma-delimited text. Both carry the
//! canonical column names as a header row and no row index.

mod delimited;
mod error;
mod workbook;

use std::path::{Path, PathBuf};

use hda_model::ExportFormat;
use polars::prelude::DataFrame;
use tracing::debug;

pub use delimited::write_csv;
pub use error::{ExportError, Result};
pub use workbook::{SHEET_NAME, write_workbook};

/// What an export wrote and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub rows: usize,
    pub columns: usize,
}

/// Write `df` to `path` in the format its extension selects.
pub fn write_merged_table(df: &DataFrame, path: &Path) -> Result<ExportSummary> {
    let format = ExportFormat::from_path(path);
    debug!(path = %path.display(), %format, "writing merged table");
    match format {
        ExportFormat::Workbook => write_workbook(df, path)?,
        ExportFormat::Csv => write_csv(df, path)?,
    }
    Ok(ExportSummary {
        path: path.to_path_buf(),
        format,
        rows: df.height(),
        columns: df.width(),
    })
}

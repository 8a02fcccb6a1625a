//! Error taxonomy for user actions.

use hda_ingest::IngestError;
use hda_model::Source;
use hda_output::ExportError;
use hda_report::ReportError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors surfaced by [`crate::Session`] actions.
///
/// Every variant leaves the session exactly as it was before the action.
#[derive(Debug, Error)]
pub enum HospitalError {
    /// Source file missing, unreadable or not tabular.
    #[error("failed to load {kind} data: {error}")]
    Load {
        kind: Source,
        #[source]
        error: IngestError,
    },

    /// Merge requested before every source was loaded.
    #[error("please load all files before merging (missing: {})", join_sources(.missing))]
    Precondition { missing: Vec<Source> },

    /// Nothing merged yet, or the destination could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Report requested before a merge, or on a missing column.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// DataFrame operation failed while reconciling or merging.
    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

fn join_sources(sources: &[Source]) -> String {
    sources
        .iter()
        .map(Source::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for session actions.
pub type Result<T> = std::result::Result<T, HospitalError>;

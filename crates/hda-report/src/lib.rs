//! Chart inputs derived from the merged table.
//!
//! Each [`ReportKind`] maps to one grouping of the merged rows. Rendering is
//! left to the caller; this crate only produces the numbers and labels.

mod build;
mod error;
mod stats;
mod types;

use hda_model::ReportKind;
use polars::prelude::DataFrame;
use tracing::debug;

pub use build::{diagnosis_shares, gender_by_hospital, height_by_hospital, patients_per_hospital};
pub use error::{ReportError, Result};
pub use stats::summarize;
pub use types::{
    CategoryCount, Distribution, ReportBody, ReportData, Share, StackedRow, Summary,
};

const GENDER_LEGEND: &str = "Gender";

/// Build the data behind the `kind` chart from the merged table.
pub fn build_report(df: &DataFrame, kind: ReportKind) -> Result<ReportData> {
    let body = match kind {
        ReportKind::Bar => patients_per_hospital(df)?,
        ReportKind::Pie => diagnosis_shares(df)?,
        ReportKind::Violin => height_by_hospital(df)?,
        ReportKind::StackedGender => gender_by_hospital(df)?,
    };
    debug!(report = %kind, groups = body.len(), "report built");
    Ok(ReportData {
        kind,
        title: kind.title(),
        x_label: kind.x_label(),
        y_label: kind.y_label(),
        legend: matches!(kind, ReportKind::StackedGender).then_some(GENDER_LEGEND),
        body,
    })
}

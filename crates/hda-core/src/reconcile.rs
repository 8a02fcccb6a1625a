//! Schema reconciliation.
//!
//! Each source names the shared columns its own way. Reconciliation renames
//! them onto the canonical schema so the merge can align rows by name.

use hda_model::Source;
use polars::prelude::{DataFrame, PolarsResult};
use tracing::debug;

/// Return a copy of `df` with `source`'s columns renamed to canonical names.
///
/// The input frame is left untouched. A rename whose source column is absent
/// is skipped.
pub fn reconcile(source: Source, df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut canonical = df.clone();
    for &(from, to) in source.column_renames() {
        if canonical.column(from).is_err() {
            debug!(source = %source, column = from, "rename skipped, column not present");
            continue;
        }
        canonical.rename(from, to.into())?;
    }
    Ok(canonical)
}

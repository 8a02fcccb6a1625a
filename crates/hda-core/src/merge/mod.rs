//! Merge engine.
//!
//! Turns the three canonicalized source tables into the single cleaned
//! table. The steps run in a fixed order:
//!
//! 1. [`concat_canonical`] stacks general, prenatal and sports rows over the
//!    union of their columns.
//! 2. [`drop_index_artifact`] removes the `Unnamed: 0` column.
//! 3. [`drop_empty_rows`] removes rows with no values at all.
//! 4. [`normalize_gender`] maps gender literals onto `m` / `f`.
//! 5. [`fill_missing`] replaces the remaining nulls with zero.
//! 6. [`normalize_hospital`] stores `hospital` as trimmed text.
//! 7. [`drop_placeholder_hospitals`] removes rows whose hospital is `"0"`.

mod clean;
mod concat;

pub use clean::{
    drop_empty_rows, drop_index_artifact, drop_placeholder_hospitals, fill_missing,
    normalize_gender, normalize_hospital,
};
pub use concat::{concat_canonical, union_columns};

use hda_model::Source;
use polars::prelude::{DataFrame, PolarsResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::reconcile::reconcile;

/// Row accounting for one merge run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Input rows per source, in [`Source::ALL`] order.
    pub source_rows: [usize; 3],
    pub index_column_dropped: bool,
    pub empty_rows_dropped: usize,
    /// Gender values left as written because they matched no known literal.
    pub unrecognized_gender: usize,
    pub cells_filled: usize,
    pub placeholder_rows_dropped: usize,
    pub merged_rows: usize,
    pub merged_columns: usize,
}

impl MergeStats {
    pub fn total_source_rows(&self) -> usize {
        self.source_rows.iter().sum()
    }

    pub fn rows_for(&self, source: Source) -> usize {
        self.source_rows[source.index()]
    }

    /// Rows removed by the merge, whatever the reason.
    pub fn rows_dropped(&self) -> usize {
        self.empty_rows_dropped + self.placeholder_rows_dropped
    }
}

/// The cleaned table together with how it was produced.
#[derive(Debug, Clone)]
pub struct MergedTable {
    pub data: DataFrame,
    pub stats: MergeStats,
}

impl MergedTable {
    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn width(&self) -> usize {
        self.data.width()
    }
}

/// Reconcile and merge the three source tables.
///
/// The inputs are only read; each is reconciled on a copy, so calling this
/// again with the same tables yields the same result.
pub fn merge_sources(
    general: &DataFrame,
    prenatal: &DataFrame,
    sports: &DataFrame,
) -> PolarsResult<MergedTable> {
    let canonical = [
        reconcile(Source::General, general)?,
        reconcile(Source::Prenatal, prenatal)?,
        reconcile(Source::Sports, sports)?,
    ];
    let mut stats = MergeStats {
        source_rows: [general.height(), prenatal.height(), sports.height()],
        ..MergeStats::default()
    };

    let mut data = concat_canonical(&canonical)?;
    debug!(
        rows = data.height(),
        columns = data.width(),
        "sources concatenated"
    );

    stats.index_column_dropped = drop_index_artifact(&mut data)?;
    if stats.index_column_dropped {
        debug!("dropped row-index column");
    }

    stats.empty_rows_dropped = drop_empty_rows(&mut data)?;
    debug!(dropped = stats.empty_rows_dropped, "empty rows removed");

    stats.unrecognized_gender = normalize_gender(&mut data)?;
    if stats.unrecognized_gender > 0 {
        warn!(
            count = stats.unrecognized_gender,
            "gender values not recognized, kept as written"
        );
    }

    stats.cells_filled = fill_missing(&mut data)?;
    debug!(cells = stats.cells_filled, "missing cells filled");

    normalize_hospital(&mut data)?;
    stats.placeholder_rows_dropped = drop_placeholder_hospitals(&mut data)?;
    debug!(
        dropped = stats.placeholder_rows_dropped,
        "placeholder hospital rows removed"
    );

    stats.merged_rows = data.height();
    stats.merged_columns = data.width();
    Ok(MergedTable { data, stats })
}

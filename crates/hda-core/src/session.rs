//! Session state: three source slots, one merged slot and the user actions
//! that move data between them.

use std::path::{Path, PathBuf};

use hda_ingest::{LoadOptions, read_source_table};
use hda_model::{ActionOutcome, ReportKind, Source, SourceStatus};
use hda_output::{ExportError, ExportSummary, write_merged_table};
use hda_report::{ReportData, ReportError, build_report};
use polars::prelude::DataFrame;
use tracing::{info, warn};

use crate::error::{HospitalError, Result};
use crate::merge::{MergedTable, merge_sources};

/// Message shown when a merge is attempted with a source missing.
pub const MISSING_SOURCES_MESSAGE: &str = "Please load all files before merging.";

/// Message shown when an export is attempted before any merge.
pub const NOTHING_TO_SAVE_MESSAGE: &str = "No data to save.";

/// A source table together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub data: DataFrame,
}

/// Everything a user has loaded or merged so far.
///
/// Every action either succeeds completely or leaves the session as it was.
#[derive(Debug, Default)]
pub struct Session {
    sources: [Option<LoadedSource>; 3],
    merged: Option<MergedTable>,
    load_options: LoadOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_options(load_options: LoadOptions) -> Self {
        Self {
            load_options,
            ..Self::default()
        }
    }

    pub fn load_options(&self) -> &LoadOptions {
        &self.load_options
    }

    /// Load `path` into the slot for `source` and return its row count.
    ///
    /// On failure the slot keeps whatever it held before. The merged table is
    /// not touched either way.
    pub fn load(&mut self, source: Source, path: &Path) -> Result<usize> {
        let data = read_source_table(path, &self.load_options)
            .map_err(|error| HospitalError::Load { kind: source, error })?;
        let rows = data.height();
        info!(
            source = %source,
            path = %path.display(),
            rows,
            columns = data.width(),
            "source loaded"
        );
        self.sources[source.index()] = Some(LoadedSource {
            path: path.to_path_buf(),
            data,
        });
        Ok(rows)
    }

    /// Load action as triggered from a file picker. `None` means the user
    /// cancelled the picker.
    pub fn load_selected(&mut self, source: Source, path: Option<&Path>) -> ActionOutcome {
        let Some(path) = path else {
            return ActionOutcome::cancelled();
        };
        match self.load(source, path) {
            Ok(_) => ActionOutcome::loaded(),
            Err(error) => {
                warn!(source = %source, %error, "load failed");
                ActionOutcome::failure(error.to_string())
            }
        }
    }

    pub fn source(&self, source: Source) -> Option<&LoadedSource> {
        self.sources[source.index()].as_ref()
    }

    pub fn status(&self, source: Source) -> SourceStatus {
        match self.source(source) {
            Some(loaded) => SourceStatus::Loaded {
                rows: loaded.data.height(),
            },
            None => SourceStatus::NotLoaded,
        }
    }

    /// Sources that have not been loaded yet, in merge order.
    pub fn missing_sources(&self) -> Vec<Source> {
        Source::ALL
            .into_iter()
            .filter(|source| self.source(*source).is_none())
            .collect()
    }

    /// Merge the three loaded sources, replacing any earlier merged table.
    pub fn merge(&mut self) -> Result<&MergedTable> {
        let [Some(general), Some(prenatal), Some(sports)] = &self.sources else {
            return Err(HospitalError::Precondition {
                missing: self.missing_sources(),
            });
        };
        let merged = merge_sources(&general.data, &prenatal.data, &sports.data)?;
        info!(
            rows = merged.stats.merged_rows,
            columns = merged.stats.merged_columns,
            dropped = merged.stats.rows_dropped(),
            "merge complete"
        );
        Ok(self.merged.insert(merged))
    }

    pub fn merge_action(&mut self) -> ActionOutcome {
        match self.merge() {
            Ok(_) => ActionOutcome::merged(),
            Err(HospitalError::Precondition { missing }) => {
                warn!(missing = missing.len(), "merge attempted before all sources loaded");
                ActionOutcome::failure(MISSING_SOURCES_MESSAGE)
            }
            Err(error) => {
                warn!(%error, "merge failed");
                ActionOutcome::failure(error.to_string())
            }
        }
    }

    pub fn merged(&self) -> Option<&MergedTable> {
        self.merged.as_ref()
    }

    /// Whether export and report actions have something to work on.
    pub fn merged_available(&self) -> bool {
        self.merged.is_some()
    }

    /// Write the merged table to `path`; `.xlsx` selects a workbook.
    pub fn export(&self, path: &Path) -> Result<ExportSummary> {
        let merged = self.merged.as_ref().ok_or(ExportError::NothingMerged)?;
        let summary = write_merged_table(&merged.data, path)?;
        info!(
            path = %summary.path.display(),
            format = %summary.format,
            rows = summary.rows,
            "merged table exported"
        );
        Ok(summary)
    }

    pub fn export_action(&self, path: &Path) -> ActionOutcome {
        match self.export(path) {
            Ok(summary) => ActionOutcome::saved(&summary.path),
            Err(HospitalError::Export(ExportError::NothingMerged)) => {
                ActionOutcome::failure(NOTHING_TO_SAVE_MESSAGE)
            }
            Err(error) => {
                warn!(%error, "export failed");
                ActionOutcome::failure(error.to_string())
            }
        }
    }

    /// Data behind one of the canned charts.
    pub fn report(&self, kind: ReportKind) -> Result<ReportData> {
        let merged = self.merged.as_ref().ok_or(ReportError::NotMerged)?;
        Ok(build_report(&merged.data, kind)?)
    }

    pub fn generate_report(&self, kind: ReportKind) -> (ActionOutcome, Option<ReportData>) {
        match self.report(kind) {
            Ok(data) => (ActionOutcome::success(kind.title()), Some(data)),
            Err(error) => {
                warn!(report = %kind, %error, "report failed");
                (ActionOutcome::failure(error.to_string()), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();

        for source in Source::ALL {
            assert_eq!(session.status(source), SourceStatus::NotLoaded);
        }
        assert!(!session.merged_available());
        assert_eq!(session.missing_sources(), Source::ALL.to_vec());
    }

    #[test]
    fn cancelled_selection_is_a_no_op() {
        let mut session = Session::new();

        let outcome = session.load_selected(Source::General, None);

        assert!(outcome.success);
        assert_eq!(outcome, ActionOutcome::cancelled());
        assert_eq!(session.status(Source::General), SourceStatus::NotLoaded);
    }

    #[test]
    fn merge_without_sources_reports_every_missing_one() {
        let mut session = Session::new();

        let err = session.merge().unwrap_err();

        assert!(matches!(
            err,
            HospitalError::Precondition { ref missing } if missing.len() == 3
        ));
        assert_eq!(
            session.merge_action(),
            ActionOutcome::failure(MISSING_SOURCES_MESSAGE)
        );
    }

    #[test]
    fn export_and_report_need_a_merge() {
        let session = Session::new();

        assert!(matches!(
            session.export(Path::new("out.csv")),
            Err(HospitalError::Export(ExportError::NothingMerged))
        ));
        assert_eq!(
            session.export_action(Path::new("out.csv")),
            ActionOutcome::failure(NOTHING_TO_SAVE_MESSAGE)
        );
        let (outcome, data) = session.generate_report(ReportKind::Bar);
        assert!(!outcome.success);
        assert!(data.is_none());
    }
}

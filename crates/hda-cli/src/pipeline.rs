//! The load → merge → export → report sequence behind `hda merge`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hda_core::Session;
use hda_ingest::LoadOptions;
use hda_model::{ReportKind, Source};
use hda_output::ExportSummary;
use hda_report::{ReportBody, ReportData};
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Inputs for one merge run.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub general: PathBuf,
    pub prenatal: PathBuf,
    pub sports: PathBuf,
    /// Export destination; nothing is written when `None`.
    pub output: Option<PathBuf>,
    pub reports: Vec<ReportKind>,
    pub load_options: LoadOptions,
}

impl MergeRequest {
    fn path_for(&self, source: Source) -> &PathBuf {
        match source {
            Source::General => &self.general,
            Source::Prenatal => &self.prenatal,
            Source::Sports => &self.sports,
        }
    }
}

/// Results of a merge run. The session holds the loaded sources and the
/// merged table.
#[derive(Debug)]
pub struct MergeRun {
    pub session: Session,
    pub export: Option<ExportSummary>,
    pub reports: Vec<ReportData>,
}

pub fn run_merge_pipeline(request: &MergeRequest) -> Result<MergeRun> {
    let mut session = Session::with_load_options(request.load_options);

    {
        let span = info_span!("load");
        let _guard = span.enter();
        for source in Source::ALL {
            let path = request.path_for(source);
            session
                .load(source, path)
                .with_context(|| format!("load {} from {}", source.label(), path.display()))?;
        }
    }

    {
        let span = info_span!("merge");
        let _guard = span.enter();
        session.merge().context("merge sources")?;
    }

    let export = match &request.output {
        Some(path) => {
            let span = info_span!("export", path = %path.display());
            let _guard = span.enter();
            Some(
                session
                    .export(path)
                    .with_context(|| format!("export to {}", path.display()))?,
            )
        }
        None => None,
    };

    let mut reports = Vec::with_capacity(request.reports.len());
    {
        let span = info_span!("report");
        let _guard = span.enter();
        for &kind in &request.reports {
            let report = session
                .report(kind)
                .with_context(|| format!("build {kind} report"))?;
            log_report(&report);
            reports.push(report);
        }
    }

    info!(
        rows = session.merged().map_or(0, |merged| merged.height()),
        exported = export.is_some(),
        reports = reports.len(),
        "merge run finished"
    );
    Ok(MergeRun {
        session,
        export,
        reports,
    })
}

fn log_report(report: &ReportData) {
    if let ReportBody::Counts { categories } = &report.body {
        for category in categories {
            debug!(
                report = %report.kind,
                label = redact_value(&category.label),
                count = category.count,
                "report category"
            );
        }
    } else {
        debug!(report = %report.kind, groups = report.body.len(), "report built");
    }
}

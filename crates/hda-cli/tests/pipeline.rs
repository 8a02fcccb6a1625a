//! Integration tests for the merge pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use hda_cli::pipeline::{MergeRequest, run_merge_pipeline};
use hda_ingest::LoadOptions;
use hda_model::{ExportFormat, ReportKind};
use hda_report::ReportBody;

fn write_sources(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let general = dir.join("general.csv");
    let prenatal = dir.join("prenatal.csv");
    let sports = dir.join("sports.csv");
    fs::write(
        &general,
        ",hospital,gender,height,diagnosis\n\
         0,general,man,1.8,cold\n\
         1,general,woman,1.6,stomach\n\
         2,general,man,1.7,cold\n",
    )
    .expect("write general");
    fs::write(
        &prenatal,
        "HOSPITAL,Sex,height,diagnosis\n\
         prenatal,,1.65,pregnancy\n\
         0,,,\n",
    )
    .expect("write prenatal");
    fs::write(
        &sports,
        "Hospital,Male/female,height,diagnosis\n\
         sports,female,1.9,sprain\n",
    )
    .expect("write sports");
    (general, prenatal, sports)
}

fn request(dir: &Path) -> MergeRequest {
    let (general, prenatal, sports) = write_sources(dir);
    MergeRequest {
        general,
        prenatal,
        sports,
        output: None,
        reports: Vec::new(),
        load_options: LoadOptions::default(),
    }
}

#[test]
fn test_merge_without_output() {
    let dir = tempfile::tempdir().expect("temp dir");

    let run = run_merge_pipeline(&request(dir.path())).expect("run");

    let merged = run.session.merged().expect("merged");
    assert_eq!(merged.height(), 5);
    assert_eq!(merged.stats.placeholder_rows_dropped, 1);
    assert!(run.export.is_none());
    assert!(run.reports.is_empty());
}

#[test]
fn test_merge_exports_and_reports() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut request = request(dir.path());
    request.output = Some(dir.path().join("out").with_extension("xlsx"));
    request.reports = vec![ReportKind::Bar, ReportKind::StackedGender];

    let run = run_merge_pipeline(&request).expect("run");

    let export = run.export.expect("export summary");
    assert_eq!(export.format, ExportFormat::Workbook);
    assert!(export.path.exists());
    assert_eq!(run.reports.len(), 2);
    let ReportBody::Counts { categories } = &run.reports[0].body else {
        panic!("expected counts");
    };
    assert_eq!(categories[0].label, "general");
    assert_eq!(categories[0].count, 3);
}

#[test]
fn test_missing_source_names_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut request = request(dir.path());
    request.sports = dir.path().join("absent.csv");

    let error = run_merge_pipeline(&request).expect_err("missing sports file");

    let message = format!("{error:#}");
    assert!(message.contains("Sports Hospital"));
    assert!(message.contains("absent.csv"));
}

#[test]
fn test_size_limit_is_enforced() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut request = request(dir.path());
    request.load_options = LoadOptions::default().with_max_file_size(8);

    let error = run_merge_pipeline(&request).expect_err("files over the limit");

    assert!(format!("{error:#}").contains("limit"));
}

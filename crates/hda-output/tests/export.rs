use std::fs;

use hda_ingest::{LoadOptions, read_source_table};
use hda_model::ExportFormat;
use hda_output::{ExportError, write_merged_table};
use polars::prelude::{DataFrame, NamedFrom, Series};

fn merged_fixture() -> DataFrame {
    DataFrame::new(vec![
        Series::new("hospital".into(), vec!["general", "prenatal", "sports"]).into(),
        Series::new("gender".into(), vec!["m", "f", "f"]).into(),
        Series::new("height".into(), vec![1.8f64, 1.62, 0.0]).into(),
    ])
    .expect("fixture frame")
}

#[test]
fn extension_selects_the_writer() {
    let dir = tempfile::tempdir().expect("temp dir");
    let df = merged_fixture();

    let xlsx = write_merged_table(&df, &dir.path().join("merged.XLSX")).expect("xlsx export");
    let csv = write_merged_table(&df, &dir.path().join("merged.txt")).expect("csv export");

    assert_eq!(xlsx.format, ExportFormat::Workbook);
    assert_eq!(csv.format, ExportFormat::Csv);
    assert_eq!(csv.rows, 3);
    assert_eq!(csv.columns, 3);
    assert!(fs::read(&xlsx.path).expect("read xlsx").starts_with(b"PK"));
    assert!(
        fs::read_to_string(&csv.path)
            .expect("read csv")
            .starts_with("hospital,gender,height\n")
    );
}

#[test]
fn csv_export_reloads_with_the_same_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("merged.csv");
    let df = merged_fixture();

    write_merged_table(&df, &path).expect("export");
    let reloaded = read_source_table(&path, &LoadOptions::default()).expect("reload");

    assert_eq!(reloaded.height(), df.height());
    assert_eq!(reloaded.get_column_names(), df.get_column_names());
    let hospitals: Vec<Option<&str>> = reloaded
        .column("hospital")
        .expect("hospital")
        .str()
        .expect("text column")
        .into_iter()
        .collect();
    assert_eq!(
        hospitals,
        vec![Some("general"), Some("prenatal"), Some("sports")]
    );
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("merged.csv");

    let result = write_merged_table(&merged_fixture(), &path);

    assert!(matches!(result, Err(ExportError::Io { .. })));
}

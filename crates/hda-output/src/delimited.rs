//! Comma-delimited export.

use std::fs::File;
use std::path::Path;

use hda_ingest::any_to_string_for_output;
use polars::prelude::{AnyValue, DataFrame};

use crate::error::{ExportError, Result};

/// Write `df` as comma-delimited text: header row, then one line per row.
///
/// Nulls are written as empty fields. Floats keep their decimal part.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    let csv_error = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer
        .write_record(df.get_column_names().iter().map(|name| name.as_str()))
        .map_err(csv_error)?;

    let columns = df.get_columns();
    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string_for_output(
                column.get(idx).unwrap_or(AnyValue::Null),
            ));
        }
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn writes_header_and_rows() {
        let df = DataFrame::new(vec![
            Series::new("hospital".into(), vec!["general", "sports"]).into(),
            Series::new("height".into(), vec![1.0f64, 1.75]).into(),
            Series::new("age".into(), vec![Some(30i64), None]).into(),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");

        write_csv(&df, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "hospital,height,age\ngeneral,1.0,30\nsports,1.75,\n"
        );
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let df = DataFrame::new(vec![
            Series::new("diagnosis".into(), vec!["cold, mild"]).into(),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");

        write_csv(&df, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "diagnosis\n\"cold, mild\"\n");
    }
}

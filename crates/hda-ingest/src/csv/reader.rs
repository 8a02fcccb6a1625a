//! CSV file reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Cell values read as missing, in any column.
///
/// Matches the tokens spreadsheet and pandas exports write for missing data,
/// so `NaN` or `N/A` in a gender column is treated like an empty cell.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how a source file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
    /// Rows scanned to infer column types. `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
            infer_schema_length: None,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }
}

/// Check file size against a limit before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;

    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads the first line of a file, without a UTF-8 BOM.
fn read_first_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let reader = BufReader::new(file);

    match reader.lines().next() {
        Some(line) => {
            let line = line.map_err(|e| IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(
                line.strip_prefix('\u{feff}').unwrap_or(&line).to_string(),
            ))
        }
        None => Ok(None),
    }
}

/// Reads the header row of a CSV file.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let Some(line) = read_first_line(path)? else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    let headers = CsvHeaders::new(parse_csv_line(&line));
    if headers.is_empty() || headers.is_blank() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads one hospital export into a DataFrame.
///
/// Values and names are kept as written, except that blank header cells are
/// named `Unnamed: <position>` and any of [`NA_VALUES`] is read as null.
/// Nothing is returned unless the whole file parsed.
pub fn read_source_table(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    check_file_size(path, options.max_file_size)?;
    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse| {
            parse.with_null_values(Some(NullValues::AllColumns(
                NA_VALUES.iter().map(|&token| token.into()).collect(),
            )))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    apply_unnamed_headers(&mut df, &headers)?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "source table loaded"
    );
    Ok(df)
}

/// Renames columns whose header cell was blank.
fn apply_unnamed_headers(df: &mut DataFrame, headers: &CsvHeaders) -> Result<()> {
    if headers.len() != df.width() {
        return Ok(());
    }
    let current: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for ((raw, resolved), existing) in headers
        .columns
        .iter()
        .zip(headers.resolved_names())
        .zip(current)
    {
        if raw.is_empty() && existing != resolved {
            df.rename(&existing, resolved.into())?;
        }
    }
    Ok(())
}

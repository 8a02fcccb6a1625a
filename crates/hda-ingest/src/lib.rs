//! Hospital source loading.
//!
//! Reads a delimited export into a Polars `DataFrame` exactly as written:
//! header row becomes column names, data rows become rows, empty cells
//! become nulls. The only naming rule applied is the one every tabular
//! reader in this workflow shares: a blank header cell is called
//! `Unnamed: <position>`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hda_ingest::{LoadOptions, read_source_table};
//!
//! let df = read_source_table(Path::new("data/general.csv"), &LoadOptions::default())?;
//! println!("{} rows", df.height());
//! ```

mod csv;
mod error;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, LoadOptions, MAX_CSV_FILE_SIZE, NA_VALUES, check_file_size, read_csv_schema,
    read_source_table, validate_encoding,
};

// === AnyValue Helpers ===
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_for_output, format_numeric, parse_f64,
    parse_i64,
};

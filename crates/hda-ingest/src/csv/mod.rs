//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{
    LoadOptions, MAX_CSV_FILE_SIZE, NA_VALUES, check_file_size, read_csv_schema, read_source_table,
    validate_encoding,
};

//! Spreadsheet workbook export.

use std::path::Path;

use hda_ingest::{any_to_f64, any_to_string};
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::{ExportError, Result};

/// Name of the single worksheet holding the table.
pub const SHEET_NAME: &str = "Sheet1";

const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

/// Write `df` to a workbook with one sheet: a bold header row, then one row
/// per table row. Numeric columns become number cells, everything else
/// becomes text. Nulls leave the cell empty.
pub fn write_workbook(df: &DataFrame, path: &Path) -> Result<()> {
    // header row counts against the sheet limit
    if df.height() + 1 > MAX_ROWS || df.width() > MAX_COLUMNS {
        return Err(ExportError::SheetTooLarge {
            rows: df.height(),
            columns: df.width(),
        });
    }
    let workbook_error = |source| ExportError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    fill_sheet(&mut workbook, df).map_err(workbook_error)?;
    workbook.save(path).map_err(workbook_error)?;
    Ok(())
}

fn fill_sheet(workbook: &mut Workbook, df: &DataFrame) -> std::result::Result<(), XlsxError> {
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, column) in (0u16..).zip(df.get_columns()) {
        sheet.write_string_with_format(0, col, column.name().as_str(), &header)?;

        let numeric = column.dtype().is_integer() || column.dtype().is_float();
        for (row, idx) in (1u32..).zip(0..df.height()) {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if matches!(value, AnyValue::Null) {
                continue;
            }
            match (numeric, any_to_f64(value.clone())) {
                (true, Some(number)) => {
                    sheet.write_number(row, col, number)?;
                }
                _ => {
                    sheet.write_string(row, col, any_to_string(value))?;
                }
            }
        }
    }
    Ok(())
}

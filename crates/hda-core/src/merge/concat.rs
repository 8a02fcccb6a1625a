//! Union-of-columns concatenation.

use std::collections::BTreeSet;

use hda_ingest::{any_to_f64, any_to_i64, any_to_string};
use polars::prelude::{
    AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, PolarsResult, Series,
};

/// Storage type chosen for a merged column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// `None` for a column with no values, which does not constrain the
    /// result. Blank CSV columns arrive as all-null text.
    fn of(column: &Column) -> Option<Self> {
        let dtype = column.dtype();
        if matches!(dtype, DataType::Null) || column.null_count() == column.len() {
            None
        } else if dtype.is_integer() {
            Some(ColumnKind::Integer)
        } else if dtype.is_float() {
            Some(ColumnKind::Float)
        } else {
            Some(ColumnKind::Text)
        }
    }

    fn unify(self, other: Self) -> Self {
        match (self, other) {
            (ColumnKind::Text, _) | (_, ColumnKind::Text) => ColumnKind::Text,
            (ColumnKind::Float, _) | (_, ColumnKind::Float) => ColumnKind::Float,
            _ => ColumnKind::Integer,
        }
    }
}

/// Column names across `frames` in order of first appearance.
pub fn union_columns(frames: &[DataFrame]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut ordered = Vec::new();
    for frame in frames {
        for name in frame.get_column_names() {
            if seen.insert(name.to_string()) {
                ordered.push(name.to_string());
            }
        }
    }
    ordered
}

/// Stack `frames` vertically, aligning cells by column name.
///
/// Rows keep their order within each frame and frames keep their order.
/// A column missing from a frame is null for that frame's rows. When frames
/// disagree on a column's type the wider one wins: integer, then float,
/// then text. Frames where the column holds only nulls do not take part,
/// and a column that is null everywhere is stored as float.
pub fn concat_canonical(frames: &[DataFrame]) -> PolarsResult<DataFrame> {
    let total: usize = frames.iter().map(DataFrame::height).sum();
    let mut columns = Vec::new();
    for name in union_columns(frames) {
        let kind = frames
            .iter()
            .filter_map(|frame| frame.column(&name).ok())
            .filter_map(ColumnKind::of)
            .reduce(ColumnKind::unify)
            .unwrap_or(ColumnKind::Float);
        columns.push(build_column(&name, kind, frames, total)?);
    }
    DataFrame::new(columns)
}

fn build_column(
    name: &str,
    kind: ColumnKind,
    frames: &[DataFrame],
    total: usize,
) -> PolarsResult<Column> {
    let series = match kind {
        ColumnKind::Integer => Series::new(name.into(), gather(name, frames, total, any_to_i64)?),
        ColumnKind::Float => Series::new(name.into(), gather(name, frames, total, any_to_f64)?),
        ColumnKind::Text => Series::new(
            name.into(),
            gather(name, frames, total, |value| match value {
                AnyValue::Null => None,
                other => Some(any_to_string(other)),
            })?,
        ),
    };
    Ok(series.into_column())
}

fn gather<T>(
    name: &str,
    frames: &[DataFrame],
    total: usize,
    convert: impl Fn(AnyValue<'_>) -> Option<T>,
) -> PolarsResult<Vec<Option<T>>> {
    let mut values = Vec::with_capacity(total);
    for frame in frames {
        match frame.column(name) {
            Ok(column) => {
                for idx in 0..frame.height() {
                    values.push(convert(column.get(idx)?));
                }
            }
            Err(_) => values.extend(std::iter::repeat_with(|| None).take(frame.height())),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_first_appearance_order() {
        let a = DataFrame::new(vec![
            Series::new("hospital".into(), vec!["general"]).into(),
            Series::new("age".into(), vec![40i64]).into(),
        ])
        .unwrap();
        let b = DataFrame::new(vec![
            Series::new("bmi".into(), vec![22.5f64]).into(),
            Series::new("hospital".into(), vec!["sports"]).into(),
        ])
        .unwrap();

        assert_eq!(union_columns(&[a, b]), vec!["hospital", "age", "bmi"]);
    }

    #[test]
    fn missing_columns_are_padded_with_nulls() {
        let a = DataFrame::new(vec![
            Series::new("hospital".into(), vec!["general", "general"]).into(),
            Series::new("age".into(), vec![40i64, 51]).into(),
        ])
        .unwrap();
        let b = DataFrame::new(vec![Series::new("hospital".into(), vec!["sports"]).into()])
            .unwrap();

        let merged = concat_canonical(&[a, b]).unwrap();

        assert_eq!(merged.height(), 3);
        let age = merged.column("age").unwrap();
        assert_eq!(age.dtype(), &DataType::Int64);
        assert_eq!(age.null_count(), 1);
        assert_eq!(age.get(2).unwrap(), AnyValue::Null);
    }

    #[test]
    fn mixed_numeric_columns_widen_to_float() {
        let a = DataFrame::new(vec![Series::new("height".into(), vec![2i64]).into()]).unwrap();
        let b = DataFrame::new(vec![Series::new("height".into(), vec![1.5f64]).into()]).unwrap();

        let merged = concat_canonical(&[a, b]).unwrap();

        let height = merged.column("height").unwrap();
        assert_eq!(height.dtype(), &DataType::Float64);
        assert_eq!(height.get(0).unwrap(), AnyValue::Float64(2.0));
    }

    #[test]
    fn text_wins_over_numbers() {
        let a = DataFrame::new(vec![Series::new("hospital".into(), vec![7i64]).into()]).unwrap();
        let b = DataFrame::new(vec![Series::new("hospital".into(), vec!["sports"]).into()])
            .unwrap();

        let merged = concat_canonical(&[a, b]).unwrap();

        let hospital = merged.column("hospital").unwrap().str().unwrap();
        assert_eq!(hospital.get(0), Some("7"));
        assert_eq!(hospital.get(1), Some("sports"));
    }

    #[test]
    fn blank_text_column_does_not_force_text() {
        let a = DataFrame::new(vec![Series::new("height".into(), vec![1.5f64, 2.0]).into()])
            .unwrap();
        let b = DataFrame::new(vec![
            Series::new("height".into(), vec![None::<&str>, None]).into(),
        ])
        .unwrap();

        let merged = concat_canonical(&[a, b]).unwrap();

        let height = merged.column("height").unwrap();
        assert_eq!(height.dtype(), &DataType::Float64);
        assert_eq!(height.null_count(), 2);
        assert_eq!(height.get(1).unwrap(), AnyValue::Float64(2.0));
    }
}

//! Cleaning steps applied to the concatenated table.
//!
//! Each step is usable on its own; [`super::merge_sources`] runs them in the
//! required order.

use hda_ingest::{any_to_f64, any_to_i64, any_to_string};
use hda_model::schema::{
    GENDER, GENDER_FEMALE, GENDER_MALE, HOSPITAL, HOSPITAL_PLACEHOLDER, INDEX_ARTIFACT,
    canonical_gender,
};
use polars::prelude::{
    AnyValue, BooleanChunked, DataFrame, DataType, NamedFrom, NewChunkedArray, PolarsResult,
    Series,
};

const TEXT_FILL: &str = "0";

/// Remove the `Unnamed: 0` row-index column. Returns whether it was present.
pub fn drop_index_artifact(df: &mut DataFrame) -> PolarsResult<bool> {
    if df.column(INDEX_ARTIFACT).is_err() {
        return Ok(false);
    }
    df.drop_in_place(INDEX_ARTIFACT)?;
    Ok(true)
}

/// Remove rows that are null in every column. Returns the number removed.
pub fn drop_empty_rows(df: &mut DataFrame) -> PolarsResult<usize> {
    let mut keep = vec![false; df.height()];
    for column in df.get_columns() {
        for (idx, flag) in keep.iter_mut().enumerate() {
            if !*flag && !matches!(column.get(idx)?, AnyValue::Null) {
                *flag = true;
            }
        }
    }
    retain_rows(df, &keep, "non_empty")
}

/// Map gender literals onto `m` / `f`.
///
/// `man`/`male` become `m`; `woman`/`female`/null become `f`. Anything else is
/// kept as written and counted in the return value. Without a gender column,
/// one is added with every row `f`.
pub fn normalize_gender(df: &mut DataFrame) -> PolarsResult<usize> {
    let height = df.height();
    let mut unrecognized = 0usize;
    let values: Vec<String> = match df.column(GENDER) {
        Ok(column) => {
            let mut values = Vec::with_capacity(height);
            for idx in 0..height {
                let raw = match column.get(idx)? {
                    AnyValue::Null => None,
                    other => Some(any_to_string(other)),
                };
                match canonical_gender(raw.as_deref()) {
                    Some(canonical) => values.push(canonical.to_string()),
                    None => {
                        let raw = raw.unwrap_or_default();
                        if raw != GENDER_MALE && raw != GENDER_FEMALE {
                            unrecognized += 1;
                        }
                        values.push(raw);
                    }
                }
            }
            values
        }
        Err(_) => vec![GENDER_FEMALE.to_string(); height],
    };
    df.with_column(Series::new(GENDER.into(), values))?;
    Ok(unrecognized)
}

/// Replace every null with zero of the column's type: `0` for integers,
/// `0.0` for floats, `"0"` for text. Returns the number of cells filled.
pub fn fill_missing(df: &mut DataFrame) -> PolarsResult<usize> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut filled = 0usize;
    for name in names {
        let (series, nulls) = {
            let column = df.column(&name)?;
            let nulls = column.null_count();
            if nulls == 0 {
                continue;
            }
            let height = column.len();
            let dtype = column.dtype();
            let series = if dtype.is_integer() || matches!(dtype, DataType::Null) {
                let mut values = Vec::with_capacity(height);
                for idx in 0..height {
                    values.push(any_to_i64(column.get(idx)?).unwrap_or(0));
                }
                Series::new(name.as_str().into(), values)
            } else if dtype.is_float() {
                let mut values = Vec::with_capacity(height);
                for idx in 0..height {
                    values.push(any_to_f64(column.get(idx)?).unwrap_or(0.0));
                }
                Series::new(name.as_str().into(), values)
            } else {
                let mut values = Vec::with_capacity(height);
                for idx in 0..height {
                    values.push(match column.get(idx)? {
                        AnyValue::Null => TEXT_FILL.to_string(),
                        other => any_to_string(other),
                    });
                }
                Series::new(name.as_str().into(), values)
            };
            (series, nulls)
        };
        df.with_column(series)?;
        filled += nulls;
    }
    Ok(filled)
}

/// Store `hospital` as trimmed text. Nulls and a missing column become the
/// placeholder `"0"`.
///
/// Numbers go through [`format_numeric`](hda_ingest::format_numeric), so a
/// whole float loses its trailing `.0`: `12.0` is stored as `"12"`, not
/// `"12.0"`, and `0.0` matches the placeholder. Fractions are kept (`12.5`).
pub fn normalize_hospital(df: &mut DataFrame) -> PolarsResult<()> {
    let height = df.height();
    let values: Vec<String> = match df.column(HOSPITAL) {
        Ok(column) => {
            let mut values = Vec::with_capacity(height);
            for idx in 0..height {
                values.push(match column.get(idx)? {
                    AnyValue::Null => HOSPITAL_PLACEHOLDER.to_string(),
                    other => any_to_string(other).trim().to_string(),
                });
            }
            values
        }
        Err(_) => vec![HOSPITAL_PLACEHOLDER.to_string(); height],
    };
    df.with_column(Series::new(HOSPITAL.into(), values))?;
    Ok(())
}

/// Remove rows whose hospital is the placeholder `"0"`. Returns the number
/// removed. Expects [`normalize_hospital`] to have run.
pub fn drop_placeholder_hospitals(df: &mut DataFrame) -> PolarsResult<usize> {
    let keep: Vec<bool> = df
        .column(HOSPITAL)?
        .str()?
        .into_iter()
        .map(|value| value != Some(HOSPITAL_PLACEHOLDER))
        .collect();
    retain_rows(df, &keep, "real_hospital")
}

fn retain_rows(df: &mut DataFrame, keep: &[bool], mask_name: &str) -> PolarsResult<usize> {
    let dropped = keep.iter().filter(|flag| !**flag).count();
    if dropped > 0 {
        let mask = BooleanChunked::from_slice(mask_name.into(), keep);
        *df = df.filter(&mask)?;
    }
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect()
    }

    #[test]
    fn index_artifact_is_dropped_when_present() {
        let mut df = DataFrame::new(vec![
            Series::new("Unnamed: 0".into(), vec![0i64, 1]).into(),
            Series::new("hospital".into(), vec!["general", "general"]).into(),
        ])
        .unwrap();

        assert!(drop_index_artifact(&mut df).unwrap());
        assert!(df.column("Unnamed: 0").is_err());
        assert!(!drop_index_artifact(&mut df).unwrap());
    }

    #[test]
    fn only_fully_null_rows_are_dropped() {
        let mut df = DataFrame::new(vec![
            Series::new("hospital".into(), vec![Some("general"), None, None]).into(),
            Series::new("age".into(), vec![Some(30i64), None, Some(12)]).into(),
        ])
        .unwrap();

        let dropped = drop_empty_rows(&mut df).unwrap();

        assert_eq!(dropped, 1);
        assert_eq!(df.height(), 2);
        assert_eq!(
            text_values(&df, "hospital"),
            vec![Some("general".to_string()), None]
        );
    }

    #[test]
    fn gender_literals_are_normalized() {
        let mut df = DataFrame::new(vec![Series::new(
            "gender".into(),
            vec![
                Some("man"),
                Some("male"),
                Some("woman"),
                Some("female"),
                None,
                Some("unknown"),
                Some("m"),
            ],
        )
        .into()])
        .unwrap();

        let unrecognized = normalize_gender(&mut df).unwrap();

        assert_eq!(unrecognized, 1);
        let values: Vec<String> = text_values(&df, "gender")
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        assert_eq!(values, vec!["m", "m", "f", "f", "f", "unknown", "m"]);
    }

    #[test]
    fn missing_gender_column_defaults_to_female() {
        let mut df =
            DataFrame::new(vec![Series::new("hospital".into(), vec!["a", "b"]).into()]).unwrap();

        normalize_gender(&mut df).unwrap();

        assert_eq!(
            text_values(&df, "gender"),
            vec![Some("f".to_string()), Some("f".to_string())]
        );
    }

    #[test]
    fn nulls_are_filled_by_column_type() {
        let mut df = DataFrame::new(vec![
            Series::new("age".into(), vec![Some(30i64), None]).into(),
            Series::new("height".into(), vec![None, Some(1.7f64)]).into(),
            Series::new("diagnosis".into(), vec![None, Some("cold")]).into(),
        ])
        .unwrap();

        let filled = fill_missing(&mut df).unwrap();

        assert_eq!(filled, 3);
        let age = df.column("age").unwrap();
        assert_eq!(age.dtype(), &DataType::Int64);
        assert_eq!(age.get(1).unwrap(), AnyValue::Int64(0));
        let height = df.column("height").unwrap();
        assert_eq!(height.get(0).unwrap(), AnyValue::Float64(0.0));
        assert_eq!(
            text_values(&df, "diagnosis"),
            vec![Some("0".to_string()), Some("cold".to_string())]
        );
    }

    #[test]
    fn hospital_is_trimmed_text() {
        let mut df = DataFrame::new(vec![Series::new(
            "hospital".into(),
            vec![Some("  general "), None],
        )
        .into()])
        .unwrap();

        normalize_hospital(&mut df).unwrap();

        assert_eq!(
            text_values(&df, "hospital"),
            vec![Some("general".to_string()), Some("0".to_string())]
        );
    }

    #[test]
    fn numeric_hospital_is_stringified() {
        let mut df =
            DataFrame::new(vec![Series::new("hospital".into(), vec![0.0f64, 12.0]).into()])
                .unwrap();

        normalize_hospital(&mut df).unwrap();
        let dropped = drop_placeholder_hospitals(&mut df).unwrap();

        assert_eq!(dropped, 1);
        assert_eq!(text_values(&df, "hospital"), vec![Some("12".to_string())]);
    }

    #[test]
    fn fractional_hospital_keeps_its_decimals() {
        let mut df =
            DataFrame::new(vec![Series::new("hospital".into(), vec![12.0f64, 12.5]).into()])
                .unwrap();

        normalize_hospital(&mut df).unwrap();

        assert_eq!(
            text_values(&df, "hospital"),
            vec![Some("12".to_string()), Some("12.5".to_string())]
        );
    }

    #[test]
    fn placeholder_hospital_rows_are_removed() {
        let mut df = DataFrame::new(vec![
            Series::new("hospital".into(), vec!["general", "0", "sports"]).into(),
            Series::new("gender".into(), vec!["m", "f", "f"]).into(),
        ])
        .unwrap();

        let dropped = drop_placeholder_hospitals(&mut df).unwrap();

        assert_eq!(dropped, 1);
        assert_eq!(
            text_values(&df, "hospital"),
            vec![Some("general".to_string()), Some("sports".to_string())]
        );
    }
}

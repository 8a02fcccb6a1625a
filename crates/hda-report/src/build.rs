//! Grouping of the merged table into chart values.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use hda_ingest::{any_to_f64, any_to_string};
use hda_model::schema::{DIAGNOSIS, GENDER, HEIGHT, HOSPITAL};
use polars::prelude::{AnyValue, Column, DataFrame};

use crate::error::{ReportError, Result};
use crate::stats::summarize;
use crate::types::{CategoryCount, Distribution, ReportBody, Share, StackedRow};

fn required<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| ReportError::MissingColumn {
        column: name.to_string(),
    })
}

fn labels(column: &Column) -> Result<Vec<String>> {
    let mut labels = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        labels.push(any_to_string(column.get(idx)?));
    }
    Ok(labels)
}

/// Count occurrences, most frequent first. Ties keep first-appearance order.
fn value_counts(labels: Vec<String>) -> Vec<CategoryCount> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for label in labels {
        match positions.get(&label) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(label.clone(), counts.len());
                counts.push(CategoryCount { label, count: 1 });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Rows per hospital.
pub fn patients_per_hospital(df: &DataFrame) -> Result<ReportBody> {
    let hospitals = labels(required(df, HOSPITAL)?)?;
    Ok(ReportBody::Counts {
        categories: value_counts(hospitals),
    })
}

/// Rows per diagnosis with each diagnosis's share of all rows.
pub fn diagnosis_shares(df: &DataFrame) -> Result<ReportBody> {
    let diagnoses = labels(required(df, DIAGNOSIS)?)?;
    let total = diagnoses.len();
    let slices = value_counts(diagnoses)
        .into_iter()
        .map(|CategoryCount { label, count }| Share {
            label,
            count,
            percent: (count as f64 * 1000.0 / total as f64).round() / 10.0,
        })
        .collect();
    Ok(ReportBody::Shares { slices })
}

/// Numeric heights per hospital, hospitals in first-appearance order.
/// Cells that are not numbers are skipped.
pub fn height_by_hospital(df: &DataFrame) -> Result<ReportBody> {
    let hospitals = labels(required(df, HOSPITAL)?)?;
    let heights = required(df, HEIGHT)?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for (idx, hospital) in hospitals.into_iter().enumerate() {
        let pos = match positions.get(&hospital) {
            Some(&pos) => pos,
            None => {
                positions.insert(hospital.clone(), groups.len());
                groups.push((hospital, Vec::new()));
                groups.len() - 1
            }
        };
        let height = match heights.get(idx)? {
            AnyValue::Null => None,
            value => any_to_f64(value),
        };
        if let Some(height) = height.filter(|h| h.is_finite()) {
            groups[pos].1.push(height);
        }
    }

    Ok(ReportBody::Distribution {
        groups: groups
            .into_iter()
            .map(|(group, values)| Distribution {
                summary: summarize(&values),
                group,
                values,
            })
            .collect(),
    })
}

/// Rows per (hospital, gender), both sorted ascending. Missing combinations
/// count as zero.
pub fn gender_by_hospital(df: &DataFrame) -> Result<ReportBody> {
    let hospitals = labels(required(df, HOSPITAL)?)?;
    let genders = labels(required(df, GENDER)?)?;

    let mut table: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut all_genders = BTreeSet::new();
    for (hospital, gender) in hospitals.into_iter().zip(genders) {
        all_genders.insert(gender.clone());
        *table.entry(hospital).or_default().entry(gender).or_default() += 1;
    }

    let genders: Vec<String> = all_genders.into_iter().collect();
    let rows = table
        .into_iter()
        .map(|(hospital, by_gender)| StackedRow {
            counts: genders
                .iter()
                .map(|gender| by_gender.get(gender).copied().unwrap_or(0))
                .collect(),
            hospital,
        })
        .collect();
    Ok(ReportBody::Stacked { genders, rows })
}

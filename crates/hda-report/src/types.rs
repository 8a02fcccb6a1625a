//! Report payloads.

use hda_model::ReportKind;
use serde::Serialize;

/// Everything a chart needs: title, axis labels and the grouped values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub kind: ReportKind,
    pub title: &'static str,
    pub x_label: Option<&'static str>,
    pub y_label: Option<&'static str>,
    /// Legend title, only set for charts with a series per category.
    pub legend: Option<&'static str>,
    pub body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportBody {
    /// One bar per category.
    Counts { categories: Vec<CategoryCount> },
    /// One slice per category with its percentage of the whole.
    Shares { slices: Vec<Share> },
    /// Numeric values per group.
    Distribution { groups: Vec<Distribution> },
    /// One stacked bar per hospital, one segment per gender. `counts` in
    /// each row line up with `genders`.
    Stacked {
        genders: Vec<String>,
        rows: Vec<StackedRow>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    /// Percentage rounded to one decimal.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub group: String,
    pub values: Vec<f64>,
    /// `None` when the group has no numeric values.
    pub summary: Option<Summary>,
}

/// Five-number summary plus count. Quartiles use linear interpolation
/// between the closest ranks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedRow {
    pub hospital: String,
    pub counts: Vec<usize>,
}

impl ReportBody {
    /// Number of groups the chart draws.
    pub fn len(&self) -> usize {
        match self {
            ReportBody::Counts { categories } => categories.len(),
            ReportBody::Shares { slices } => slices.len(),
            ReportBody::Distribution { groups } => groups.len(),
            ReportBody::Stacked { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Type-safe enumerations for the hospital data workflow.
//!
//! Sources, report kinds and export formats are all fixed sets; these enums
//! give them compile-time names instead of passing strings around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::schema::{GENDER, HOSPITAL};

/// One of the three fixed hospital data origins.
///
/// The declaration order is the concatenation order used by the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// General hospital export; already uses canonical column names.
    General,
    /// Prenatal hospital export (`HOSPITAL`, `Sex`).
    Prenatal,
    /// Sports hospital export (`Hospital`, `Male/female`).
    Sports,
}

impl Source {
    /// All sources in merge order.
    pub const ALL: [Source; 3] = [Source::General, Source::Prenatal, Source::Sports];

    /// Returns the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::General => "general",
            Source::Prenatal => "prenatal",
            Source::Sports => "sports",
        }
    }

    /// Returns the human-readable label used in prompts and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Source::General => "General Hospital",
            Source::Prenatal => "Prenatal Hospital",
            Source::Sports => "Sports Hospital",
        }
    }

    /// Column renames that bring this source onto the canonical schema,
    /// as `(source name, canonical name)` pairs.
    pub fn column_renames(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Source::General => &[],
            Source::Prenatal => &[("HOSPITAL", HOSPITAL), ("Sex", GENDER)],
            Source::Sports => &[("Hospital", HOSPITAL), ("Male/female", GENDER)],
        }
    }

    /// Position in merge order.
    pub fn index(&self) -> usize {
        match self {
            Source::General => 0,
            Source::Prenatal => 1,
            Source::Sports => 2,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Source::General),
            "prenatal" => Ok(Source::Prenatal),
            "sports" => Ok(Source::Sports),
            _ => Err(format!("Unknown source: {s}")),
        }
    }
}

/// The four canned charts a user can request after a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Patients per hospital.
    Bar,
    /// Diagnosis share.
    Pie,
    /// Height distribution per hospital.
    Violin,
    /// Patients per hospital split by gender.
    StackedGender,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Bar,
        ReportKind::Pie,
        ReportKind::Violin,
        ReportKind::StackedGender,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Bar => "bar",
            ReportKind::Pie => "pie",
            ReportKind::Violin => "violin",
            ReportKind::StackedGender => "stacked_gender",
        }
    }

    /// Chart title.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Bar => "Number of Patients per Hospital",
            ReportKind::Pie => "Diagnosis Distribution",
            ReportKind::Violin => "Height Distribution by Hospital",
            ReportKind::StackedGender => "Gender Breakdown by Hospital",
        }
    }

    /// Category axis label, if the chart has one.
    pub fn x_label(&self) -> Option<&'static str> {
        match self {
            ReportKind::Bar => Some("Hospital Type"),
            ReportKind::Pie => None,
            ReportKind::Violin | ReportKind::StackedGender => Some("Hospital"),
        }
    }

    /// Value axis label, if the chart has one.
    pub fn y_label(&self) -> Option<&'static str> {
        match self {
            ReportKind::Bar | ReportKind::StackedGender => Some("Number of Patients"),
            ReportKind::Pie => None,
            ReportKind::Violin => Some("height"),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "bar" => Ok(ReportKind::Bar),
            "pie" => Ok(ReportKind::Pie),
            "violin" => Ok(ReportKind::Violin),
            "stacked_gender" | "gender" => Ok(ReportKind::StackedGender),
            _ => Err(format!("Unknown report kind: {s}")),
        }
    }
}

/// File format chosen for an export, derived from the destination name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Spreadsheet workbook (`.xlsx`).
    Workbook,
    /// Comma-delimited text.
    Csv,
}

impl ExportFormat {
    /// `.xlsx` (any ASCII case) selects a workbook; every other name is
    /// written as delimited text.
    pub fn from_path(path: &Path) -> Self {
        let is_workbook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        if is_workbook {
            ExportFormat::Workbook
        } else {
            ExportFormat::Csv
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Workbook => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert_eq!("general".parse::<Source>().unwrap(), Source::General);
        assert_eq!("PRENATAL".parse::<Source>().unwrap(), Source::Prenatal);
        assert_eq!(" sports ".parse::<Source>().unwrap(), Source::Sports);
        assert!("ward".parse::<Source>().is_err());
    }

    #[test]
    fn test_source_order_matches_index() {
        for (idx, source) in Source::ALL.iter().enumerate() {
            assert_eq!(source.index(), idx);
        }
        assert!(Source::General < Source::Prenatal);
        assert!(Source::Prenatal < Source::Sports);
    }

    #[test]
    fn test_column_renames() {
        assert!(Source::General.column_renames().is_empty());
        assert_eq!(
            Source::Prenatal.column_renames(),
            &[("HOSPITAL", "hospital"), ("Sex", "gender")]
        );
        assert_eq!(
            Source::Sports.column_renames(),
            &[("Hospital", "hospital"), ("Male/female", "gender")]
        );
    }

    #[test]
    fn test_report_kind_from_str() {
        assert_eq!("bar".parse::<ReportKind>().unwrap(), ReportKind::Bar);
        assert_eq!(
            "stacked-gender".parse::<ReportKind>().unwrap(),
            ReportKind::StackedGender
        );
        assert_eq!(
            "Stacked_Gender".parse::<ReportKind>().unwrap(),
            ReportKind::StackedGender
        );
        assert!("scatter".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/merged.xlsx")),
            ExportFormat::Workbook
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("merged.XLSX")),
            ExportFormat::Workbook
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("merged.csv")),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("merged")),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("merged.xlsx.txt")),
            ExportFormat::Csv
        );
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        let json = serde_json::to_string(&ReportKind::StackedGender).unwrap();
        assert_eq!(json, "\"stacked_gender\"");
        let json = serde_json::to_string(&Source::Prenatal).unwrap();
        assert_eq!(json, "\"prenatal\"");
    }
}

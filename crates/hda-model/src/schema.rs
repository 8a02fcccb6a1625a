//! Canonical column names and the literal values the merge relies on.

/// Facility identifier column.
pub const HOSPITAL: &str = "hospital";

/// Normalized gender column (`"m"` / `"f"`).
pub const GENDER: &str = "gender";

/// Pass-through column used by the diagnosis pie chart.
pub const DIAGNOSIS: &str = "diagnosis";

/// Pass-through column used by the height violin chart.
pub const HEIGHT: &str = "height";

/// Name given to a blank header cell at position 0, i.e. a row index written
/// by an earlier export.
pub const INDEX_ARTIFACT: &str = "Unnamed: 0";

/// Prefix used to name blank header cells.
pub const UNNAMED_PREFIX: &str = "Unnamed: ";

/// Canonical male value.
pub const GENDER_MALE: &str = "m";

/// Canonical female value, also used when no gender was recorded.
pub const GENDER_FEMALE: &str = "f";

/// Literals mapped to [`GENDER_MALE`]. Matching is case-sensitive.
pub const MALE_ALIASES: &[&str] = &["man", "male"];

/// Literals mapped to [`GENDER_FEMALE`]. Matching is case-sensitive.
pub const FEMALE_ALIASES: &[&str] = &["woman", "female"];

/// Hospital value that marks a row without a real facility.
pub const HOSPITAL_PLACEHOLDER: &str = "0";

/// Name for a blank header cell at `index`.
pub fn unnamed_column(index: usize) -> String {
    format!("{UNNAMED_PREFIX}{index}")
}

/// Map a raw gender literal to its canonical value.
///
/// Returns `None` for literals outside the recognized vocabulary; callers
/// decide what to do with those.
pub fn canonical_gender(raw: Option<&str>) -> Option<&'static str> {
    match raw {
        None => Some(GENDER_FEMALE),
        Some(value) if MALE_ALIASES.contains(&value) => Some(GENDER_MALE),
        Some(value) if FEMALE_ALIASES.contains(&value) => Some(GENDER_FEMALE),
        Some(_) => None,
    }
}

//! Result shapes handed back to the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Success flag plus a message suitable for showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Outcome of a cancelled file selection. Nothing changed, nothing failed.
    pub fn cancelled() -> Self {
        Self::success("Selection cancelled")
    }

    pub fn loaded() -> Self {
        Self::success(SourceStatus::LOADED_LABEL)
    }

    pub fn merged() -> Self {
        Self::success("Data Merged Successfully!")
    }

    pub fn saved(path: &Path) -> Self {
        Self::success(format!("Data saved to {}", path.display()))
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Visible load state of one source slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SourceStatus {
    NotLoaded,
    Loaded { rows: usize },
}

impl SourceStatus {
    pub const NOT_LOADED_LABEL: &'static str = "Not Loaded";
    pub const LOADED_LABEL: &'static str = "File Loaded Successfully";

    pub fn is_loaded(&self) -> bool {
        matches!(self, SourceStatus::Loaded { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceStatus::NotLoaded => Self::NOT_LOADED_LABEL,
            SourceStatus::Loaded { .. } => Self::LOADED_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_message_includes_path() {
        let outcome = ActionOutcome::saved(Path::new("out/merged.csv"));
        assert!(outcome.success);
        assert_eq!(outcome.message, "Data saved to out/merged.csv");
    }

    #[test]
    fn status_labels() {
        assert_eq!(SourceStatus::NotLoaded.label(), "Not Loaded");
        let loaded = SourceStatus::Loaded { rows: 4 };
        assert!(loaded.is_loaded());
        assert_eq!(loaded.label(), "File Loaded Successfully");
    }
}

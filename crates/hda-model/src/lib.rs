//! Shared vocabulary for the hospital data workspace.
//!
//! Nothing here performs I/O. The types describe the three fixed data
//! sources, the canonical column names produced by reconciliation, the
//! report and export kinds a user can ask for, and the outcome shape every
//! user action reports back.

pub mod enums;
pub mod outcome;
pub mod schema;

pub use enums::{ExportFormat, ReportKind, Source};
pub use outcome::{ActionOutcome, SourceStatus};

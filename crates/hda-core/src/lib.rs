//! Hospital data core: reconcile, merge, and the session that holds it all.
//!
//! The three source exports are reconciled onto one canonical schema and
//! merged into a single cleaned table. [`Session`] owns the three source
//! slots and the merged slot and exposes the user actions (load, merge,
//! export, report) that read and replace them.

pub mod error;
pub mod merge;
pub mod reconcile;
pub mod session;

pub use error::{HospitalError, Result};
pub use merge::{MergeStats, MergedTable, merge_sources};
pub use reconcile::reconcile;
pub use session::{LoadedSource, Session};

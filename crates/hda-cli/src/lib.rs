//! Library half of the `hda` command: logging setup and the merge pipeline.

pub mod logging;
pub mod pipeline;

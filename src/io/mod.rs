//! Input/output helpers.
//!
//! - fixation report ingest + schema validation (`ingest`)
//! - per-point CSV export (`export`)
//! - segments JSON read/write (`segments`)

pub mod export;
pub mod ingest;
pub mod segments;

pub use export::*;
pub use ingest::*;
pub use segments::*;

//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw fixation records as read from the report (`FixationRecord`)
//! - selection criteria and their validation (`Selection`)
//! - segmented output (`FixationPoint`, `Segment`)
//! - rendering configuration (`OutputMode`, `SegmentStyle`, `RunConfig`)

pub mod types;

pub use types::*;

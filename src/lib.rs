//! `gaze-paths` library crate.
//!
//! The binary (`gaze`) is a thin wrapper around this library so that:
//!
//! - core logic (selection, segmentation) is testable without spawning processes
//! - modules are reusable (e.g., future GUI front-ends, analysis notebooks)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod segment;

//! Dataset producers.
//!
//! Real data comes from a tracker export read by `io::ingest`; this module
//! only generates synthetic stand-ins for it.

pub mod sample;

pub use sample::*;

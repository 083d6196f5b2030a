//! Fixation selection and segmentation.
//!
//! Responsibilities:
//!
//! - filter report rows to one (session, trial, frame-range) combination
//! - partition the matches at zero, one, or two pivot frames
//! - hand ordered segments to the renderers and exporters

pub mod selection;

pub use selection::*;

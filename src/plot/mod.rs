//! Rendering back-ends for segmented fixation paths.
//!
//! - `png`: full-fidelity bitmap rendering (overlay image, sized markers,
//!   per-segment colors, index annotations)
//! - `ascii`: deterministic terminal preview used by display mode

pub mod ascii;
pub mod png;

pub use ascii::*;
pub use png::*;

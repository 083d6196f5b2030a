//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during selection and segmentation
//! - exported to JSON/CSV
//! - reloaded later for inspection or re-plotting

use std::path::PathBuf;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One row of the fixation report.
///
/// `frame` is the video frame at fixation onset. The tracker export stores it
/// as numeric text; exports that use a non-numeric first-frame marker must map
/// it to `1` before this tool reads the file (data-preparation contract of the
/// report producer, not enforced here).
#[derive(Debug, Clone, PartialEq)]
pub struct FixationRecord {
    pub session: String,
    pub trial: i64,
    pub frame: f64,
    pub x: f64,
    pub y: f64,
    pub duration_ms: f64,
}

/// A plotted fixation: screen position plus duration (marker size driver).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixationPoint {
    pub x: f64,
    pub y: f64,
    pub duration_ms: f64,
}

/// An ordered run of fixations between two frame bounds.
///
/// Points keep the original report row order; the segmenter never sorts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub points: Vec<FixationPoint>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn durations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.duration_ms).collect()
    }
}

/// Maximum number of pivot frames a selection may carry.
pub const MAX_PIVOTS: usize = 2;

/// What to select out of the report: one (session, trial, frame-range)
/// combination, optionally split at one or two pivot frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub session: String,
    pub trial: i64,
    /// Inclusive lower frame bound (fixations starting at or after it).
    pub first_frame: f64,
    /// Inclusive upper frame bound (fixations starting at or before it).
    pub last_frame: f64,
    /// Zero, one, or two pivot frames, in ascending order within the range.
    pub pivots: Vec<f64>,
}

impl Selection {
    /// Check the frame-range and pivot constraints.
    ///
    /// Violated constraints are rejected up front with a descriptive error
    /// instead of silently producing empty or misassigned segments.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.first_frame.is_finite() && self.last_frame.is_finite()) {
            return Err(AppError::input("Frame bounds must be finite numbers."));
        }
        if self.first_frame > self.last_frame {
            return Err(AppError::input(format!(
                "Invalid frame range: first frame {} is greater than last frame {}.",
                fmt_frame(self.first_frame),
                fmt_frame(self.last_frame)
            )));
        }
        if self.pivots.len() > MAX_PIVOTS {
            return Err(AppError::input(format!(
                "At most {MAX_PIVOTS} pivot frames are supported (got {}).",
                self.pivots.len()
            )));
        }
        for &p in &self.pivots {
            if !p.is_finite() {
                return Err(AppError::input("Pivot frames must be finite numbers."));
            }
            if p < self.first_frame || p > self.last_frame {
                return Err(AppError::input(format!(
                    "Pivot frame {} lies outside the frame range [{}, {}].",
                    fmt_frame(p),
                    fmt_frame(self.first_frame),
                    fmt_frame(self.last_frame)
                )));
            }
        }
        if let &[p1, p2] = &self.pivots[..] {
            if p1 > p2 {
                return Err(AppError::input(format!(
                    "Pivot frames must be ascending: {} > {}.",
                    fmt_frame(p1),
                    fmt_frame(p2)
                )));
            }
        }
        Ok(())
    }

    /// Number of segments this selection partitions matches into.
    pub fn segment_count(&self) -> usize {
        self.pivots.len() + 1
    }

    /// Output file stem: session label, trial, and frame bounds joined with
    /// underscores (e.g. `VPN009_trial8_1_180`).
    pub fn file_stem(&self) -> String {
        format!(
            "{}_trial{}_{}_{}",
            self.session,
            self.trial,
            fmt_frame(self.first_frame),
            fmt_frame(self.last_frame)
        )
    }
}

/// Format a frame bound for messages and filenames: whole-valued frames print
/// without a trailing `.0`.
pub fn fmt_frame(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}

/// Where a rendered plot goes. Passed explicitly per call; there is no
/// process-wide save-vs-display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Render a terminal preview.
    Display,
    /// Write a PNG to the given path.
    SaveToPath(PathBuf),
}

/// Colors for one segment of the path.
///
/// `first_point_color` exists because the fixation that opens a non-initial
/// segment (the first one at or after a pivot) is drawn in its own color.
/// Expressing that as a style field rather than slicing the segment keeps
/// empty segments harmless.
#[derive(Debug, Clone, Copy)]
pub struct SegmentStyle {
    pub path_color: RGBColor,
    pub body_color: RGBColor,
    pub first_point_color: RGBColor,
}

// xkcd color survey values, matching the palettes the analysis scripts
// historically produced.
pub const ORANGE: RGBColor = RGBColor(249, 115, 6);
pub const BABY_BLUE: RGBColor = RGBColor(162, 207, 254);
pub const GREEN: RGBColor = RGBColor(21, 176, 26);
pub const SEA_GREEN: RGBColor = RGBColor(83, 252, 161);
pub const YELLOW_GREEN: RGBColor = RGBColor(192, 251, 45);
pub const YELLOW: RGBColor = RGBColor(255, 255, 20);

/// Per-segment styles for a selection with the given pivot count.
///
/// The one-pivot and two-pivot scenarios use different palettes for
/// structurally identical segment roles; both are preserved here as data so a
/// scenario's look is a table swap, not a code change.
pub fn segment_styles(pivot_count: usize) -> Vec<SegmentStyle> {
    let style = |body, first| SegmentStyle {
        path_color: ORANGE,
        body_color: body,
        first_point_color: first,
    };
    match pivot_count {
        0 => vec![style(BABY_BLUE, BABY_BLUE)],
        1 => vec![style(GREEN, GREEN), style(YELLOW, YELLOW_GREEN)],
        _ => vec![
            style(BABY_BLUE, BABY_BLUE),
            style(GREEN, SEA_GREEN),
            style(YELLOW, YELLOW_GREEN),
        ],
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub selection: Selection,

    /// Tracker resolution: plot axes span `[0, x_axis] × [y_axis, 0]`.
    pub x_axis: u32,
    pub y_axis: u32,

    /// Optional reference image stretched under the path.
    pub overlay_image: Option<PathBuf>,

    /// Output PNG pixel size. Defaults to the tracker resolution so the
    /// overlay maps 1:1.
    pub plot_width: u32,
    pub plot_height: u32,

    /// Marker radius multiplier on top of the duration-derived radius.
    pub marker_scale: f64,

    /// Terminal preview size (columns, rows).
    pub ascii_width: usize,
    pub ascii_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// The portable JSON representation of a segmented selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentsFile {
    pub tool: String,
    pub selection: Selection,
    pub segments: Vec<Segment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(first: f64, last: f64, pivots: &[f64]) -> Selection {
        Selection {
            session: "VPN001".to_string(),
            trial: 1,
            first_frame: first,
            last_frame: last,
            pivots: pivots.to_vec(),
        }
    }

    #[test]
    fn validate_accepts_ordered_pivots() {
        assert!(selection(1.0, 180.0, &[]).validate().is_ok());
        assert!(selection(1.0, 180.0, &[90.0]).validate().is_ok());
        assert!(selection(1.0, 180.0, &[90.0, 120.0]).validate().is_ok());
        // Pivots may sit on the range bounds.
        assert!(selection(1.0, 180.0, &[1.0, 180.0]).validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let err = selection(20.0, 1.0, &[]).validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn validate_rejects_out_of_range_pivot() {
        assert!(selection(10.0, 20.0, &[5.0]).validate().is_err());
        assert!(selection(10.0, 20.0, &[25.0]).validate().is_err());
    }

    #[test]
    fn validate_rejects_misordered_pivots() {
        assert!(selection(1.0, 180.0, &[120.0, 90.0]).validate().is_err());
    }

    #[test]
    fn file_stem_concatenates_with_underscores() {
        let sel = selection(1.0, 180.0, &[90.0]);
        assert_eq!(sel.file_stem(), "VPN001_trial1_1_180");
    }

    #[test]
    fn styles_cover_every_segment() {
        for pivots in 0..=MAX_PIVOTS {
            assert_eq!(segment_styles(pivots).len(), pivots + 1);
        }
    }
}

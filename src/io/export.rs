//! Export segmented fixations to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per plotted fixation, carrying the segment ordinal and
//! the same 1-based index the plot annotates it with.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Segment;
use crate::error::AppError;

/// Write segmented fixations to a semicolon-delimited CSV file.
pub fn write_points_csv(path: &Path, segments: &[Segment]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_points_csv_to(file, segments)
        .map_err(|e| AppError::input(format!("Failed to write export CSV '{}': {e}", path.display())))
}

fn write_points_csv_to<W: Write>(mut out: W, segments: &[Segment]) -> std::io::Result<()> {
    writeln!(out, "segment;index;x;y;duration_ms")?;

    let mut index = 1usize;
    for (seg_idx, segment) in segments.iter().enumerate() {
        for p in &segment.points {
            writeln!(
                out,
                "{};{};{};{};{}",
                seg_idx + 1,
                index,
                p.x,
                p.y,
                p.duration_ms
            )?;
            index += 1;
        }
    }
    Ok(())
}

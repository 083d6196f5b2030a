//! Read/write segments JSON files.
//!
//! Segments JSON is the "portable" representation of a segmented selection:
//! - the selection that produced it (session, trial, frame range, pivots)
//! - the ordered segments themselves
//!
//! The schema is defined by `domain::SegmentsFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{Segment, Selection, SegmentsFile};
use crate::error::AppError;

/// Write a segments JSON file.
pub fn write_segments_json(path: &Path, selection: &Selection, segments: &[Segment]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create segments JSON '{}': {e}", path.display())))?;

    let out = SegmentsFile {
        tool: "gaze".to_string(),
        selection: selection.clone(),
        segments: segments.to_vec(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::input(format!("Failed to write segments JSON: {e}")))?;

    Ok(())
}

/// Read a segments JSON file.
pub fn read_segments_json(path: &Path) -> Result<SegmentsFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open segments JSON '{}': {e}", path.display())))?;
    let parsed: SegmentsFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid segments JSON: {e}")))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixationPoint;

    #[test]
    fn json_roundtrip_preserves_segments() {
        let original = SegmentsFile {
            tool: "gaze".to_string(),
            selection: Selection {
                session: "VPN002".to_string(),
                trial: 4,
                first_frame: 1.0,
                last_frame: 120.0,
                pivots: vec![60.0],
            },
            segments: vec![
                Segment {
                    points: vec![FixationPoint {
                        x: 960.0,
                        y: 540.0,
                        duration_ms: 210.5,
                    }],
                },
                Segment { points: vec![] },
            ],
        };

        let text = serde_json::to_string(&original).unwrap();
        let parsed: SegmentsFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.selection, original.selection);
        assert_eq!(parsed.segments, original.segments);
    }
}

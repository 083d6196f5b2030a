//! The fixation selector & segmenter.
//!
//! One linear scan over the report rows. A row is kept iff its session label
//! and trial index match exactly and its frame lies in
//! `[first_frame, last_frame]` (inclusive on both ends). Matches are assigned
//! to `pivots.len() + 1` segments by frame.
//!
//! Boundary ownership is fixed and asymmetric: a fixation whose frame equals
//! a pivot belongs to the segment *starting* at that pivot, never to the one
//! ending there. This decides both its color and its position in the
//! concatenated numbering, so it must not change.

use crate::domain::{FixationPoint, FixationRecord, Segment, Selection};
use crate::error::AppError;

/// Partition the matching rows of `records` into ordered segments.
///
/// Row order is preserved within each segment; segments come back in
/// ascending frame-range order (pre-pivot first). Empty segments are returned
/// as empty, never dropped, so the result always has
/// `selection.segment_count()` entries.
pub fn select_segments(records: &[FixationRecord], selection: &Selection) -> Result<Vec<Segment>, AppError> {
    selection.validate()?;

    let mut segments = vec![Segment::default(); selection.segment_count()];

    for record in records {
        if record.session != selection.session || record.trial != selection.trial {
            continue;
        }
        if record.frame < selection.first_frame || record.frame > selection.last_frame {
            continue;
        }

        // Index of the last sub-range whose inclusive start the frame has
        // reached; a frame equal to a pivot lands in the segment that pivot
        // opens.
        let idx = selection.pivots.iter().filter(|&&p| record.frame >= p).count();

        segments[idx].points.push(FixationPoint {
            x: record.x,
            y: record.y,
            duration_ms: record.duration_ms,
        });
    }

    Ok(segments)
}

/// Concatenate segments into the single plotted path.
///
/// The enumeration order of the result defines the 1-based index label each
/// fixation is annotated with.
pub fn concat_path(segments: &[Segment]) -> Vec<FixationPoint> {
    segments.iter().flat_map(|s| s.points.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(session: &str, trial: i64, frame: f64) -> FixationRecord {
        FixationRecord {
            session: session.to_string(),
            trial,
            frame,
            x: frame * 10.0,
            y: frame * 5.0,
            duration_ms: 100.0 + frame,
        }
    }

    fn selection(session: &str, trial: i64, first: f64, last: f64, pivots: &[f64]) -> Selection {
        Selection {
            session: session.to_string(),
            trial,
            first_frame: first,
            last_frame: last,
            pivots: pivots.to_vec(),
        }
    }

    fn three_rows() -> Vec<FixationRecord> {
        vec![
            record("S1", 2, 5.0),
            record("S1", 2, 10.0),
            record("S1", 2, 15.0),
        ]
    }

    #[test]
    fn no_pivot_yields_one_segment_with_all_matches() {
        let segments = select_segments(&three_rows(), &selection("S1", 2, 1.0, 20.0, &[])).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 3);
        assert_eq!(concat_path(&segments).len(), 3);
    }

    #[test]
    fn pivot_boundary_goes_to_the_later_segment() {
        let segments =
            select_segments(&three_rows(), &selection("S1", 2, 1.0, 20.0, &[10.0])).unwrap();
        assert_eq!(segments.len(), 2);
        // Frame 10 equals the pivot, so it opens segment 2.
        assert_eq!(segments[0].xs(), vec![50.0]);
        assert_eq!(segments[1].xs(), vec![100.0, 150.0]);
    }

    #[test]
    fn second_pivot_boundary_goes_to_the_third_segment() {
        let segments =
            select_segments(&three_rows(), &selection("S1", 2, 1.0, 20.0, &[5.0, 15.0])).unwrap();
        assert_eq!(segments.len(), 3);
        assert!(segments[0].is_empty());
        assert_eq!(segments[1].xs(), vec![50.0, 100.0]);
        assert_eq!(segments[2].xs(), vec![150.0]);
    }

    #[test]
    fn empty_middle_segment_is_returned_not_dropped() {
        // No row has a frame in [11, 13).
        let segments =
            select_segments(&three_rows(), &selection("S1", 2, 1.0, 20.0, &[11.0, 13.0])).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 2);
        assert!(segments[1].is_empty());
        assert_eq!(segments[2].len(), 1);
        // The concatenated path skips the empty segment cleanly.
        assert_eq!(concat_path(&segments).len(), 3);
    }

    #[test]
    fn segments_partition_exactly_the_matching_rows() {
        let mut records = three_rows();
        records.push(record("S1", 3, 10.0)); // wrong trial
        records.push(record("S2", 2, 10.0)); // wrong session
        records.push(record("S1", 2, 25.0)); // outside frame range
        records.push(record("S1", 2, 0.5)); // outside frame range

        let segments =
            select_segments(&records, &selection("S1", 2, 1.0, 20.0, &[10.0])).unwrap();
        let total: usize = segments.iter().map(Segment::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn row_order_is_preserved_within_segments() {
        // Frames out of order in the file stay out of order in the output.
        let records = vec![
            record("S1", 1, 15.0),
            record("S1", 1, 5.0),
            record("S1", 1, 12.0),
        ];
        let segments = select_segments(&records, &selection("S1", 1, 1.0, 20.0, &[])).unwrap();
        assert_eq!(segments[0].xs(), vec![150.0, 50.0, 120.0]);
    }

    #[test]
    fn rerunning_the_same_selection_is_identical() {
        let records = three_rows();
        let sel = selection("S1", 2, 1.0, 20.0, &[10.0, 12.0]);
        let a = select_segments(&records, &sel).unwrap();
        let b = select_segments(&records, &sel).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn constraint_violations_are_rejected() {
        let records = three_rows();
        assert!(select_segments(&records, &selection("S1", 2, 20.0, 1.0, &[])).is_err());
        assert!(select_segments(&records, &selection("S1", 2, 1.0, 20.0, &[30.0])).is_err());
        assert!(
            select_segments(&records, &selection("S1", 2, 1.0, 20.0, &[12.0, 10.0])).is_err()
        );
    }
}

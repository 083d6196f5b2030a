//! Reporting utilities: run statistics and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::Segment;
use crate::io::ingest::IngestedData;

/// Summary numbers for one selection run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub rows_read: usize,
    pub matched: usize,
    pub segment_counts: Vec<usize>,
    /// Min/max fixation duration among matches, when any matched.
    pub duration_ms_span: Option<(f64, f64)>,
}

/// Compute run statistics from the ingested report and the segmented output.
pub fn compute_stats(ingest: &IngestedData, segments: &[Segment]) -> RunStats {
    let segment_counts: Vec<usize> = segments.iter().map(Segment::len).collect();
    let matched: usize = segment_counts.iter().sum();

    let mut min_d = f64::INFINITY;
    let mut max_d = f64::NEG_INFINITY;
    for p in segments.iter().flat_map(|s| &s.points) {
        min_d = min_d.min(p.duration_ms);
        max_d = max_d.max(p.duration_ms);
    }
    let duration_ms_span = if min_d.is_finite() && max_d.is_finite() {
        Some((min_d, max_d))
    } else {
        None
    };

    RunStats {
        rows_read: ingest.rows_read,
        matched,
        segment_counts,
        duration_ms_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixationPoint;

    #[test]
    fn stats_count_per_segment_and_total() {
        let ingest = IngestedData {
            records: vec![],
            rows_read: 10,
        };
        let segments = vec![
            Segment {
                points: vec![
                    FixationPoint {
                        x: 0.0,
                        y: 0.0,
                        duration_ms: 50.0,
                    },
                    FixationPoint {
                        x: 1.0,
                        y: 1.0,
                        duration_ms: 300.0,
                    },
                ],
            },
            Segment { points: vec![] },
        ];

        let stats = compute_stats(&ingest, &segments);
        assert_eq!(stats.rows_read, 10);
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.segment_counts, vec![2, 0]);
        assert_eq!(stats.duration_ms_span, Some((50.0, 300.0)));
    }

    #[test]
    fn empty_run_has_no_duration_span() {
        let ingest = IngestedData {
            records: vec![],
            rows_read: 0,
        };
        let stats = compute_stats(&ingest, &[Segment::default()]);
        assert_eq!(stats.matched, 0);
        assert!(stats.duration_ms_span.is_none());
    }
}

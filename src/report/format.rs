//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the selection/segmentation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{RunConfig, fmt_frame};
use crate::report::RunStats;

/// Format the run summary (selection echo + dataset stats + segment counts).
pub fn format_run_summary(stats: &RunStats, config: &RunConfig) -> String {
    let sel = &config.selection;
    let mut out = String::new();

    out.push_str("=== gaze - fixation path ===\n");
    out.push_str(&format!(
        "Selection: {} trial {} | frames=[{}, {}]",
        sel.session,
        sel.trial,
        fmt_frame(sel.first_frame),
        fmt_frame(sel.last_frame)
    ));
    if !sel.pivots.is_empty() {
        let pivots: Vec<String> = sel.pivots.iter().map(|&p| fmt_frame(p)).collect();
        out.push_str(&format!(" | pivots=[{}]", pivots.join(", ")));
    }
    out.push('\n');

    out.push_str(&format!(
        "Report: {} (rows={})\n",
        config.data_path.display(),
        stats.rows_read
    ));

    if stats.matched == 0 {
        out.push_str("No fixations matched the selection; the plot will be empty.\n");
        return out;
    }

    let counts: Vec<String> = stats.segment_counts.iter().map(usize::to_string).collect();
    out.push_str(&format!(
        "Matched: {} fixations | per segment: {}\n",
        stats.matched,
        counts.join(" / ")
    ));

    if let Some((min_d, max_d)) = stats.duration_ms_span {
        out.push_str(&format!("Durations: [{min_d:.1}, {max_d:.1}] ms\n"));
    }

    out
}

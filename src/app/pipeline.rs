//! Shared "selection pipeline" logic used by both the single-session and
//! batch front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> validate -> segment -> stats
//!
//! The front-ends then focus on presentation (preview vs saved PNGs). Each
//! call re-reads the report from disk; there is no caching between
//! invocations, so a batch run always sees the file as it currently is.

use crate::domain::{RunConfig, Segment};
use crate::error::AppError;
use crate::io::ingest::{IngestedData, load_fixations};
use crate::report::{RunStats, compute_stats};
use crate::segment::select_segments;

/// All computed outputs of a single selection run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub segments: Vec<Segment>,
    pub stats: RunStats,
}

/// Execute the selection pipeline and return the computed outputs.
pub fn run_selection(config: &RunConfig) -> Result<RunOutput, AppError> {
    config.selection.validate()?;

    let ingest = load_fixations(&config.data_path)?;
    let segments = select_segments(&ingest.records, &config.selection)?;
    let stats = compute_stats(&ingest, &segments);

    Ok(RunOutput {
        ingest,
        segments,
        stats,
    })
}

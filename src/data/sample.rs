//! Synthetic fixation report generation.
//!
//! Lets users smoke-test plots without a tracker export at hand. The output
//! uses the exact schema `io::ingest` expects, including the semicolon
//! delimiter and the `1`-based first frame.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{LogNormal, Normal};

use crate::domain::FixationRecord;
use crate::error::AppError;
use crate::io::ingest::{COL_DURATION, COL_FRAME, COL_SESSION, COL_TRIAL, COL_X, COL_Y};

/// Frame rate assumed when advancing fixation onset frames.
const FRAMES_PER_SECOND: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub sessions: usize,
    pub trials: usize,
    pub fixations_per_trial: usize,
    pub seed: u64,
    pub x_axis: u32,
    pub y_axis: u32,
}

/// Generate a deterministic synthetic report: per trial, a random walk over
/// the tracker plane with right-skewed fixation durations and onset frames
/// advancing with elapsed time.
pub fn generate_report(config: &SampleConfig) -> Result<Vec<FixationRecord>, AppError> {
    if config.sessions == 0 || config.trials == 0 || config.fixations_per_trial == 0 {
        return Err(AppError::input(
            "Sample sessions, trials, and fixations per trial must all be > 0.",
        ));
    }
    if config.x_axis == 0 || config.y_axis == 0 {
        return Err(AppError::input("Sample resolution must be positive."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    // Saccade amplitudes: mean-zero jumps with ~1/8-screen spread.
    let step_x = Normal::new(0.0, f64::from(config.x_axis) / 8.0)
        .map_err(|e| AppError::input(format!("Sample distribution error: {e}")))?;
    let step_y = Normal::new(0.0, f64::from(config.y_axis) / 8.0)
        .map_err(|e| AppError::input(format!("Sample distribution error: {e}")))?;
    // Durations: right-skewed around ~200 ms, like real fixation data.
    let duration = LogNormal::new(5.3, 0.35)
        .map_err(|e| AppError::input(format!("Sample distribution error: {e}")))?;

    let mut records =
        Vec::with_capacity(config.sessions * config.trials * config.fixations_per_trial);

    for s in 0..config.sessions {
        let session = format!("VPN{:03}", s + 1);
        for trial in 1..=config.trials {
            let mut x = f64::from(config.x_axis) / 2.0;
            let mut y = f64::from(config.y_axis) / 2.0;
            let mut frame = 1.0f64;

            for _ in 0..config.fixations_per_trial {
                let duration_ms: f64 = duration.sample(&mut rng);
                let duration_ms = duration_ms.clamp(40.0, 1500.0);

                records.push(FixationRecord {
                    session: session.clone(),
                    trial: trial as i64,
                    frame: frame.round(),
                    x: round2(x),
                    y: round2(y),
                    duration_ms: round2(duration_ms),
                });

                x = (x + step_x.sample(&mut rng)).clamp(0.0, f64::from(config.x_axis));
                y = (y + step_y.sample(&mut rng)).clamp(0.0, f64::from(config.y_axis));
                frame += duration_ms / 1000.0 * FRAMES_PER_SECOND;
            }
        }
    }

    Ok(records)
}

/// Write records as a semicolon-delimited report file.
pub fn write_report(path: &Path, records: &[FixationRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create report '{}': {e}", path.display())))?;
    write_report_to(file, records)
        .map_err(|e| AppError::input(format!("Failed to write report '{}': {e}", path.display())))
}

fn write_report_to<W: Write>(out: W, records: &[FixationRecord]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record([COL_SESSION, COL_TRIAL, COL_FRAME, COL_X, COL_Y, COL_DURATION])?;
    for r in records {
        writer.write_record(&[
            r.session.clone(),
            r.trial.to_string(),
            crate::domain::fmt_frame(r.frame),
            r.x.to_string(),
            r.y.to_string(),
            r.duration_ms.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

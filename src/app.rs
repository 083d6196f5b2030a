//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the selection pipeline
//! - renders previews or PNGs
//! - writes optional exports
//! - drives batch runs across sessions

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{BatchArgs, Cli, Command, PlotArgs, RenderArgs, SampleArgs, SelectArgs};
use crate::domain::{OutputMode, RunConfig, Selection};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `gaze` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Plot(args) => handle_plot(args),
        Command::Batch(args) => handle_batch(args),
        Command::Render(args) => handle_render(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let mut config = run_config_from_args(args.session.clone(), &args.select);
    config.ascii_width = args.width;
    config.ascii_height = args.height;
    config.export_csv = args.export.clone();
    config.export_json = args.export_json.clone();

    let output = match args.out {
        Some(path) => OutputMode::SaveToPath(path),
        None if args.save => {
            OutputMode::SaveToPath(PathBuf::from(format!("{}.png", config.selection.file_stem())))
        }
        None => OutputMode::Display,
    };

    let run = pipeline::run_selection(&config)?;
    println!("{}", crate::report::format_run_summary(&run.stats, &config));

    match &output {
        OutputMode::Display => {
            println!("{}", crate::plot::render_ascii(&run.segments, &config));
        }
        OutputMode::SaveToPath(path) => {
            crate::plot::render_png(path, &run.segments, &config)?;
            println!("Saved {}", path.display());
        }
    }

    if let Some(path) = &config.export_csv {
        crate::io::export::write_points_csv(path, &run.segments)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::segments::write_segments_json(path, &config.selection, &run.segments)?;
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    std::fs::create_dir_all(&args.out_dir).map_err(|e| {
        AppError::input(format!(
            "Failed to create output directory '{}': {e}",
            args.out_dir.display()
        ))
    })?;

    // Sessions run strictly in list order; each result is persisted on its
    // own and the first failure aborts the batch.
    for session in &args.sessions {
        let config = run_config_from_args(session.clone(), &args.select);
        let run = pipeline::run_selection(&config)?;

        let out_path = batch_out_path(&args.out_dir, &config.selection);
        crate::plot::render_png(&out_path, &run.segments, &config)?;
        println!(
            "Saved {} ({} fixations)",
            out_path.display(),
            run.stats.matched
        );
    }

    Ok(())
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let saved = crate::io::segments::read_segments_json(&args.segments)?;

    let config = RunConfig {
        data_path: args.segments.clone(),
        selection: saved.selection,
        x_axis: args.x_axis,
        y_axis: args.y_axis,
        overlay_image: args.image,
        plot_width: args.x_axis,
        plot_height: args.y_axis,
        marker_scale: args.marker_scale,
        ascii_width: args.width,
        ascii_height: args.height,
        export_csv: None,
        export_json: None,
    };

    match args.out {
        Some(path) => {
            crate::plot::render_png(&path, &saved.segments, &config)?;
            println!("Saved {}", path.display());
        }
        None => {
            println!("{}", crate::plot::render_ascii(&saved.segments, &config));
        }
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = crate::data::SampleConfig {
        sessions: args.sessions,
        trials: args.trials,
        fixations_per_trial: args.fixations,
        seed: args.seed,
        x_axis: args.x_axis,
        y_axis: args.y_axis,
    };

    let records = crate::data::generate_report(&config)?;
    crate::data::write_report(&args.out, &records)?;
    println!(
        "Wrote {} fixations ({} sessions x {} trials) to {}",
        records.len(),
        args.sessions,
        args.trials,
        args.out.display()
    );

    Ok(())
}

fn batch_out_path(out_dir: &Path, selection: &Selection) -> PathBuf {
    out_dir.join(format!("{}.png", selection.file_stem()))
}

pub fn run_config_from_args(session: String, args: &SelectArgs) -> RunConfig {
    let pivots = match (args.pivot, args.pivot2) {
        (Some(p1), Some(p2)) => vec![p1, p2],
        (Some(p1), None) => vec![p1],
        _ => Vec::new(),
    };

    RunConfig {
        data_path: args.data.clone(),
        selection: Selection {
            session,
            trial: args.trial,
            first_frame: args.first_frame,
            last_frame: args.last_frame,
            pivots,
        },
        x_axis: args.x_axis,
        y_axis: args.y_axis,
        overlay_image: args.image.clone(),
        plot_width: args.plot_width.unwrap_or(args.x_axis),
        plot_height: args.plot_height.unwrap_or(args.y_axis),
        marker_scale: args.marker_scale,
        ascii_width: 100,
        ascii_height: 30,
        export_csv: None,
        export_json: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_args() -> SelectArgs {
        SelectArgs {
            data: "fixations_report.csv".into(),
            trial: 8,
            first_frame: 1.0,
            last_frame: 180.0,
            pivot: Some(90.0),
            pivot2: None,
            x_axis: 1920,
            y_axis: 1080,
            image: None,
            plot_width: None,
            plot_height: None,
            marker_scale: 1.0,
        }
    }

    #[test]
    fn pivots_collect_in_order() {
        let mut args = select_args();
        args.pivot2 = Some(120.0);
        let config = run_config_from_args("VPN009".to_string(), &args);
        assert_eq!(config.selection.pivots, vec![90.0, 120.0]);
    }

    #[test]
    fn plot_size_defaults_to_tracker_resolution() {
        let config = run_config_from_args("VPN009".to_string(), &select_args());
        assert_eq!((config.plot_width, config.plot_height), (1920, 1080));
    }

    #[test]
    fn batch_paths_follow_the_file_stem() {
        let config = run_config_from_args("VPN003".to_string(), &select_args());
        let path = batch_out_path(Path::new("plots"), &config.selection);
        assert_eq!(path, Path::new("plots/VPN003_trial8_1_180.png"));
    }
}

//! Command-line parsing for the fixation path plotter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the selection/rendering code. Every knob the
//! analysis historically hard-coded (report path, resolution, overlay image,
//! save-vs-display) is an explicit flag here.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gaze", version, about = "Fixation path plotter for eye-tracking reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plot one (session, trial, frame-range) selection.
    Plot(PlotArgs),
    /// Plot the same selection for every listed session, saving one PNG each.
    Batch(BatchArgs),
    /// Re-plot a segments JSON produced by `gaze plot --export-json`.
    Render(RenderArgs),
    /// Generate a synthetic fixation report (for smoke tests and demos).
    Sample(SampleArgs),
}

/// Selection and rendering options shared by `plot` and `batch`.
#[derive(Debug, Parser, Clone)]
pub struct SelectArgs {
    /// Fixation report to read (semicolon-delimited).
    #[arg(long, default_value = "fixations_report.csv", value_name = "CSV")]
    pub data: PathBuf,

    /// Trial index to select.
    #[arg(short, long)]
    pub trial: i64,

    /// Fixations starting at or after this video frame are plotted (min. 1).
    #[arg(long, default_value_t = 1.0)]
    pub first_frame: f64,

    /// Fixations starting at or before this video frame are plotted.
    #[arg(long)]
    pub last_frame: f64,

    /// Video frame where the path changes color. Between first and last frame.
    #[arg(long)]
    pub pivot: Option<f64>,

    /// Second color-change frame. Between the first pivot and the last frame.
    #[arg(long, requires = "pivot")]
    pub pivot2: Option<f64>,

    /// Tracker horizontal resolution (pixels).
    #[arg(long, default_value_t = 1920)]
    pub x_axis: u32,

    /// Tracker vertical resolution (pixels).
    #[arg(long, default_value_t = 1080)]
    pub y_axis: u32,

    /// Reference image to plot over, stretched to the tracker resolution.
    #[arg(long, value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Output PNG width in pixels (defaults to --x-axis).
    #[arg(long)]
    pub plot_width: Option<u32>,

    /// Output PNG height in pixels (defaults to --y-axis).
    #[arg(long)]
    pub plot_height: Option<u32>,

    /// Marker radius multiplier on top of the duration-derived size.
    #[arg(long, default_value_t = 1.0)]
    pub marker_scale: f64,
}

/// Options for plotting a single session.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Session label (participant) to select.
    #[arg(short, long)]
    pub session: String,

    #[command(flatten)]
    pub select: SelectArgs,

    /// Save the plot to this PNG instead of printing a terminal preview.
    #[arg(short, long, value_name = "PNG")]
    pub out: Option<PathBuf>,

    /// Save under the conventional name
    /// ({session}_trial{trial}_{first}_{last}.png) in the current directory.
    #[arg(long, conflicts_with = "out")]
    pub save: bool,

    /// Terminal preview width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Terminal preview height (rows).
    #[arg(long, default_value_t = 30)]
    pub height: usize,

    /// Export the segmented fixations to a semicolon-delimited CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the segmented fixations to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for plotting a list of sessions.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Ordered session labels, comma-separated (e.g. VPN001,VPN002,VPN003).
    #[arg(long, value_delimiter = ',', required = true)]
    pub sessions: Vec<String>,

    #[command(flatten)]
    pub select: SelectArgs,

    /// Directory the PNGs are written into, one per session.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub out_dir: PathBuf,
}

/// Options for re-plotting a saved segments file.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Segments JSON file produced by `gaze plot --export-json`.
    #[arg(long, value_name = "JSON")]
    pub segments: PathBuf,

    /// Save the plot to this PNG instead of printing a terminal preview.
    #[arg(short, long, value_name = "PNG")]
    pub out: Option<PathBuf>,

    /// Tracker horizontal resolution (pixels).
    #[arg(long, default_value_t = 1920)]
    pub x_axis: u32,

    /// Tracker vertical resolution (pixels).
    #[arg(long, default_value_t = 1080)]
    pub y_axis: u32,

    /// Reference image to plot over, stretched to the tracker resolution.
    #[arg(long, value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Marker radius multiplier on top of the duration-derived size.
    #[arg(long, default_value_t = 1.0)]
    pub marker_scale: f64,

    /// Terminal preview width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Terminal preview height (rows).
    #[arg(long, default_value_t = 30)]
    pub height: usize,
}

/// Options for generating a synthetic report.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Where to write the generated report.
    #[arg(long, default_value = "fixations_report.csv", value_name = "CSV")]
    pub out: PathBuf,

    /// Number of sessions (labelled VPN001, VPN002, ...).
    #[arg(long, default_value_t = 3)]
    pub sessions: usize,

    /// Trials per session.
    #[arg(long, default_value_t = 5)]
    pub trials: usize,

    /// Fixations per trial.
    #[arg(long, default_value_t = 40)]
    pub fixations: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Tracker horizontal resolution (pixels).
    #[arg(long, default_value_t = 1920)]
    pub x_axis: u32,

    /// Tracker vertical resolution (pixels).
    #[arg(long, default_value_t = 1080)]
    pub y_axis: u32,
}

//! Bitmap rendering of a segmented fixation path.
//!
//! The chart spans `[0, x_axis] × [y_axis, 0]`; the reversed y range puts
//! the origin in the top-left corner, matching tracker screen coordinates.
//! Ticks and mesh are omitted; the plot is the path itself, optionally over a
//! reference frame stretched to the full axis extent.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::{RunConfig, Segment, segment_styles};
use crate::error::AppError;
use crate::segment::concat_path;

/// Render `segments` to a PNG at `out_path`.
pub fn render_png(out_path: &Path, segments: &[Segment], config: &RunConfig) -> Result<(), AppError> {
    let root = BitMapBackend::new(out_path, (config.plot_width, config.plot_height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(
            0.0..f64::from(config.x_axis),
            f64::from(config.y_axis)..0.0,
        )
        .map_err(render_err)?;

    if let Some(image_path) = &config.overlay_image {
        // Stretch to the full plotting area regardless of native size.
        let (w, h) = chart.plotting_area().dim_in_pixel();
        let image = load_overlay(image_path, w, h)?;
        // With the reversed y axis, (0, 0) is the top-left corner of the area.
        let elem: BitMapElement<_> = ((0.0, 0.0), image).into();
        chart.draw_series(std::iter::once(elem)).map_err(render_err)?;
    }

    let styles = segment_styles(segments.len().saturating_sub(1));
    let path = concat_path(segments);

    // One connecting line through every fixation, in segment order. All
    // segments share the path color.
    if path.len() >= 2 {
        let path_color = styles[0].path_color;
        chart
            .draw_series(LineSeries::new(
                path.iter().map(|p| (p.x, p.y)),
                &path_color,
            ))
            .map_err(render_err)?;
    }

    for (segment, style) in segments.iter().zip(&styles) {
        // `split_first` keeps an empty segment a clean no-op.
        let Some((first, rest)) = segment.points.split_first() else {
            continue;
        };

        chart
            .draw_series(rest.iter().map(|p| {
                Circle::new(
                    (p.x, p.y),
                    marker_radius(p.duration_ms, config.marker_scale),
                    style.body_color.filled(),
                )
            }))
            .map_err(render_err)?;

        chart
            .draw_series(std::iter::once(Circle::new(
                (first.x, first.y),
                marker_radius(first.duration_ms, config.marker_scale),
                style.first_point_color.filled(),
            )))
            .map_err(render_err)?;
    }

    // 1-based sequential labels over the concatenated path.
    let label_style = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(
            path.iter()
                .enumerate()
                .map(|(i, p)| Text::new(format!("{}", i + 1), (p.x, p.y), label_style.clone())),
        )
        .map_err(render_err)?;

    root.present().map_err(|e| {
        AppError::render(format!(
            "Failed to write plot '{}': {e}",
            out_path.display()
        ))
    })?;

    Ok(())
}

/// Marker radius in pixels.
///
/// The report stores durations in ms and the marker should read as an area
/// proportional to duration, so radius grows with sqrt(duration).
pub fn marker_radius(duration_ms: f64, scale: f64) -> i32 {
    let r = (duration_ms.max(0.0) / std::f64::consts::PI).sqrt() * scale;
    (r.round() as i32).clamp(1, 200)
}

fn load_overlay(image_path: &Path, width: u32, height: u32) -> Result<DynamicImage, AppError> {
    let image = image::open(image_path).map_err(|e| {
        AppError::input(format!(
            "Failed to load overlay image '{}': {e}",
            image_path.display()
        ))
    })?;
    Ok(image.resize_exact(width, height, FilterType::Nearest))
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::render(format!("Plot rendering failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_radius_grows_with_duration() {
        let short = marker_radius(50.0, 1.0);
        let long = marker_radius(800.0, 1.0);
        assert!(long > short);
    }

    #[test]
    fn marker_radius_is_clamped() {
        assert_eq!(marker_radius(0.0, 1.0), 1);
        assert_eq!(marker_radius(-5.0, 1.0), 1);
        assert_eq!(marker_radius(1e12, 1.0), 200);
    }
}

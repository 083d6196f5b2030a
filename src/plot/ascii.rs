//! ASCII plotting for terminal output.
//!
//! This is the display-mode renderer: a fixed-size character grid, optimized
//! for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - the connecting path: `.` cells
//! - fixations: one glyph per segment (`o`, `+`, `x`)
//!
//! Index annotations and duration-sized markers are PNG-backend concerns; the
//! preview keeps to what a character cell can carry and lists per-segment
//! counts below the grid instead.

use crate::domain::{RunConfig, Segment, fmt_frame};
use crate::segment::concat_path;

const SEGMENT_GLYPHS: [char; 3] = ['o', '+', 'x'];

/// Render the preview grid for a segmented selection.
pub fn render_ascii(segments: &[Segment], config: &RunConfig) -> String {
    let width = config.ascii_width.max(10);
    let height = config.ascii_height.max(5);
    let sel = &config.selection;

    let mut grid = vec![vec![' '; width]; height];

    // Path first, so fixation glyphs can overlay it.
    let path = concat_path(segments);
    let mut prev = None;
    for p in &path {
        let x = map_x(p.x, config.x_axis, width);
        let y = map_y(p.y, config.y_axis, height);
        if let Some((x0, y0)) = prev {
            draw_line(&mut grid, x0, y0, x, y, '.');
        }
        prev = Some((x, y));
    }

    for (seg_idx, segment) in segments.iter().enumerate() {
        let glyph = SEGMENT_GLYPHS[seg_idx.min(SEGMENT_GLYPHS.len() - 1)];
        for p in &segment.points {
            let x = map_x(p.x, config.x_axis, width);
            let y = map_y(p.y, config.y_axis, height);
            grid[y][x] = glyph;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Path: {} trial {} | frames=[{}, {}] | fixations={}\n",
        sel.session,
        sel.trial,
        fmt_frame(sel.first_frame),
        fmt_frame(sel.last_frame),
        path.len()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    for (seg_idx, segment) in segments.iter().enumerate() {
        let glyph = SEGMENT_GLYPHS[seg_idx.min(SEGMENT_GLYPHS.len() - 1)];
        out.push_str(&format!(
            "segment {}: {glyph} ({} fixations)\n",
            seg_idx + 1,
            segment.len()
        ));
    }

    out
}

fn map_x(x: f64, x_axis: u32, width: usize) -> usize {
    let width = width.max(2);
    let u = (x / f64::from(x_axis.max(1))).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_axis: u32, height: usize) -> usize {
    let height = height.max(2);
    // Screen coordinates: y grows downward, same as grid rows.
    let u = (y / f64::from(y_axis.max(1))).clamp(0.0, 1.0);
    (u * (height as f64 - 1.0)).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

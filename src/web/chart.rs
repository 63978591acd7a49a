//! SVG spline chart of visits per site.
//!
//! Geometry is computed in plain `f64`; the markup lives in
//! `templates/by_site_chart.svg` and is rendered with askama, which also
//! escapes the site labels.

use askama::Template;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt::Write;

use crate::domain::repositories::SiteVisits;
use crate::error::AppError;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const MARGIN_TOP: f64 = 40.0;
pub const MARGIN_RIGHT: f64 = 30.0;
pub const MARGIN_BOTTOM: f64 = 90.0;
pub const MARGIN_LEFT: f64 = 60.0;

/// Horizontal gridlines, not counting the baseline.
const GRID_LINES: u32 = 4;

/// Offset of the rotated site labels below the baseline.
const LABEL_OFFSET: f64 = 16.0;

/// Label used for rows whose site is missing.
const UNKNOWN_SITE: &str = "(unknown)";

/// Returned verbatim when there is nothing to plot.
pub const NO_DATA_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="400" viewBox="0 0 800 400"><rect width="800" height="400" fill="#ffffff"/><text x="400" y="200" text-anchor="middle" dominant-baseline="middle" font-family="sans-serif" font-size="18" fill="#8a94a6">No data available</text></svg>"##;

/// Usable drawing area inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn standard() -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            height: CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// A plotted row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: i64,
}

/// A horizontal gridline and the count it marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub value: i64,
}

/// The chart document, rendered from `templates/by_site_chart.svg`.
#[derive(Template)]
#[template(path = "by_site_chart.svg", escape = "html")]
struct ChartTemplate {
    width: f64,
    height: f64,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    label_y: f64,
    gridlines: Vec<Gridline>,
    path: String,
    points: Vec<ChartPoint>,
}

/// Places one point per row at equal horizontal spacing.
///
/// The y scale runs linearly from 0 at the baseline to the largest count at
/// the top of the plot. A single row sits at the left edge of the plot.
pub fn layout(rows: &[SiteVisits], area: PlotArea) -> Vec<ChartPoint> {
    let max_value = rows.iter().map(|r| r.visits).max().unwrap_or(0);
    let step = if rows.len() > 1 {
        area.width / (rows.len() - 1) as f64
    } else {
        0.0
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let ratio = if max_value > 0 {
                row.visits as f64 / max_value as f64
            } else {
                0.0
            };

            ChartPoint {
                x: area.left + step * i as f64,
                y: area.bottom() - ratio * area.height,
                label: row.site.clone().unwrap_or_else(|| UNKNOWN_SITE.to_string()),
                value: row.visits,
            }
        })
        .collect()
}

/// Evenly spaced gridlines from the baseline up to the largest count.
pub fn gridlines(area: PlotArea, max_value: i64) -> Vec<Gridline> {
    (0..=GRID_LINES)
        .map(|i| {
            let fraction = f64::from(i) / f64::from(GRID_LINES);
            Gridline {
                y: area.bottom() - fraction * area.height,
                value: (max_value as f64 * fraction).round() as i64,
            }
        })
        .collect()
}

/// Smooth path through the points.
///
/// Each segment is a cubic Bézier whose two control points sit at the
/// horizontal midpoint of the segment, at the height of the start and end
/// point respectively, so the curve leaves and enters every point flat.
///
/// # Errors
///
/// Returns an error if the path cannot be written.
pub fn spline_path(points: &[ChartPoint]) -> Result<String, std::fmt::Error> {
    let mut path = String::new();

    let Some(first) = points.first() else {
        return Ok(path);
    };
    write!(path, "M {:.2} {:.2}", first.x, first.y)?;

    for pair in points.windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        let mid_x = (p0.x + p1.x) / 2.0;
        write!(
            path,
            " C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
            mid_x, p0.y, mid_x, p1.y, p1.x, p1.y
        )?;
    }

    Ok(path)
}

/// Shuffles the rows, then renders them.
///
/// The order is deliberately random so that repeated requests for the same
/// data show different arrangements.
///
/// # Errors
///
/// Returns [`AppError::Render`] or [`AppError::Template`] if the document
/// cannot be produced.
pub fn render_shuffled<R: Rng + ?Sized>(
    mut rows: Vec<SiteVisits>,
    rng: &mut R,
) -> Result<String, AppError> {
    rows.shuffle(rng);
    render(&rows)
}

/// Renders the rows in the given order as a standalone SVG document.
///
/// # Errors
///
/// Returns [`AppError::Render`] or [`AppError::Template`] if the document
/// cannot be produced.
pub fn render(rows: &[SiteVisits]) -> Result<String, AppError> {
    if rows.is_empty() {
        return Ok(NO_DATA_SVG.to_string());
    }

    let area = PlotArea::standard();
    let points = layout(rows, area);
    let max_value = rows.iter().map(|r| r.visits).max().unwrap_or(0);

    let chart = ChartTemplate {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        left: area.left,
        top: area.top,
        right: area.right(),
        bottom: area.bottom(),
        label_y: area.bottom() + LABEL_OFFSET,
        gridlines: gridlines(area, max_value),
        path: spline_path(&points)?,
        points,
    };

    Ok(chart.render()?)
}

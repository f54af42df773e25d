//! Geometry for the native backend's SVG drawing.
//!
//! Everything here is plain math on the payload so it can be tested without
//! a renderer. Coordinates are in the payload's pixel box with the origin at
//! the top-left corner.

use std::f64::consts::PI;

use super::payload::NativePieSlice;

const PADDING_TOP: f64 = 16.0;
const PADDING_RIGHT: f64 = 64.0;
const PADDING_BOTTOM: f64 = 36.0;
const GUIDE_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Plot {
    pub fn for_frame(width: u32, height: u32) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        Self {
            left: PADDING_RIGHT.min(width / 2.0),
            top: PADDING_TOP,
            right: (width - 16.0).max(PADDING_RIGHT.min(width / 2.0)),
            bottom: (height - PADDING_BOTTOM).max(PADDING_TOP),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTick {
    pub x: f64,
    pub label: String,
}

/// Projected series ready to draw as a line or bars.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGeometry {
    pub plot: Plot,
    /// Center x of each category slot.
    pub slots: Vec<f64>,
    pub slot_width: f64,
    pub points: Vec<(f64, f64)>,
    pub y_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<CategoryTick>,
}

pub fn series_geometry(
    labels: &[String],
    values: &[f64],
    width: u32,
    height: u32,
    decimal_places: u8,
) -> SeriesGeometry {
    let plot = Plot::for_frame(width, height);
    let count = labels.len().max(values.len()).max(1);
    let slot_width = plot.width() / count as f64;
    let slots: Vec<f64> = (0..count)
        .map(|i| plot.left + slot_width * (i as f64 + 0.5))
        .collect();

    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let top_value = if max > 0.0 { max } else { 1.0 };
    let project = |value: f64| plot.bottom - (value.max(0.0) / top_value) * plot.height();

    let points = values
        .iter()
        .zip(&slots)
        .map(|(value, x)| (*x, project(*value)))
        .collect();

    let y_ticks = (0..=GUIDE_LINES)
        .map(|step| {
            let value = top_value * step as f64 / GUIDE_LINES as f64;
            AxisTick {
                y: project(value),
                label: format!("{value:.prec$}", prec = usize::from(decimal_places)),
            }
        })
        .collect();

    let x_ticks = labels
        .iter()
        .zip(&slots)
        .map(|(label, x)| CategoryTick {
            x: *x,
            label: label.clone(),
        })
        .collect();

    SeriesGeometry {
        plot,
        slots,
        slot_width,
        points,
        y_ticks,
        x_ticks,
    }
}

/// Smooth path through `points` using quadratic segments that meet at the
/// midpoint between neighbours. `None` when there is nothing to draw.
pub fn bezier_path(points: &[(f64, f64)]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!("M{:.2},{:.2}", first.0, first.1);
    let mut prev = *first;
    for &next in rest {
        let mid = ((prev.0 + next.0) / 2.0, (prev.1 + next.1) / 2.0);
        let cp1 = ((mid.0 + prev.0) / 2.0, prev.1);
        let cp2 = ((mid.0 + next.0) / 2.0, next.1);
        d.push_str(&format!(
            " Q{:.2},{:.2} {:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2}",
            cp1.0, cp1.1, mid.0, mid.1, cp2.0, cp2.1, next.0, next.1
        ));
        prev = next;
    }
    Some(d)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bar_rects(geometry: &SeriesGeometry) -> Vec<BarRect> {
    let bar_width = geometry.slot_width * 0.6;
    geometry
        .points
        .iter()
        .map(|&(x, y)| BarRect {
            x: x - bar_width / 2.0,
            y,
            width: bar_width,
            height: (geometry.plot.bottom - y).max(0.0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSliceGeometry {
    pub path: String,
    pub color: String,
    pub legend: String,
    pub legend_color: String,
    pub percent: f64,
}

/// Slices in declared order, starting at twelve o'clock and going clockwise.
/// Zero-valued entries still get a legend line but no wedge path.
pub fn pie_slices(slices: &[NativePieSlice], cx: f64, cy: f64, radius: f64) -> Vec<PieSliceGeometry> {
    let total: f64 = slices.iter().map(|s| s.population.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    slices
        .iter()
        .map(|slice| {
            let fraction = slice.population.max(0.0) / total;
            let sweep = fraction * 2.0 * PI;
            let path = wedge_path(cx, cy, radius, angle, sweep);
            angle += sweep;
            let percent = (fraction * 100.0).round();
            PieSliceGeometry {
                path,
                color: slice.color.clone(),
                legend: format!("{percent}% {}", slice.name),
                legend_color: slice.legend_font_color.clone(),
                percent,
            }
        })
        .collect()
}

fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, sweep: f64) -> String {
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 2.0 * PI - 1e-9 {
        // A single arc cannot close on itself; draw two halves.
        return format!(
            "M{:.2},{:.2} A{r:.2},{r:.2} 0 1,1 {:.2},{:.2} A{r:.2},{r:.2} 0 1,1 {:.2},{:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r
        );
    }
    let end = start + sweep;
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = u8::from(sweep > PI);
    format!("M{cx:.2},{cy:.2} L{x1:.2},{y1:.2} A{r:.2},{r:.2} 0 {large_arc},1 {x2:.2},{y2:.2} Z")
}

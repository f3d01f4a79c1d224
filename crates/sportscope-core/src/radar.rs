//! Radar (spider) chart model and geometry.
//!
//! [`RadarChart`] is what a chart widget needs to draw the selected
//! record's profile; [`RadarChart::layout`] turns it into screen-space
//! points so any 2D surface can render it without further math.

use crate::format::format_percent;
use crate::projection::DetailView;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Fractions of the radius at which grid rings are drawn.
pub const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// A point in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Suggested value range of the radial scale.
///
/// Data outside the range widens the scale rather than being clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}

/// Chart data for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    /// Dataset label (the record's display name).
    pub label: String,
    /// Axis labels, in metric order.
    pub axes: Vec<String>,
    /// One value per axis.
    pub values: Vec<f64>,
    /// Hover text per axis, e.g. `Athletics: 95.00%`.
    pub tooltips: Vec<String>,
    pub suggested: ScaleRange,
}

/// One spoke of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub label: String,
    /// Outer end of the spoke.
    pub end: Point,
    /// Where the axis label is anchored, slightly beyond the spoke.
    pub label_anchor: Point,
}

/// Screen-space geometry of a [`RadarChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub center: Point,
    pub radius: f64,
    pub axes: Vec<AxisLine>,
    /// Closed grid polygons, innermost first.
    pub rings: Vec<Vec<Point>>,
    /// Data polygon vertices, one per axis.
    pub polygon: Vec<Point>,
    /// The effective scale after widening for out-of-range data.
    pub scale: ScaleRange,
}

impl RadarChart {
    /// Build the chart for a projected detail view.
    #[must_use]
    pub fn from_detail(detail: &DetailView, suggested: ScaleRange) -> Self {
        Self {
            label: detail.title.clone(),
            axes: detail.metric_series.iter().map(|p| p.label.clone()).collect(),
            values: detail.metric_series.iter().map(|p| p.value).collect(),
            tooltips: detail
                .metric_series
                .iter()
                .map(|p| format!("{}: {}", p.label, format_percent(p.value)))
                .collect(),
            suggested,
        }
    }

    /// Scale actually used: the suggested range widened to fit every value.
    #[must_use]
    pub fn scale(&self) -> ScaleRange {
        self.values.iter().fold(self.suggested, |range, &v| ScaleRange {
            min: range.min.min(v),
            max: range.max.max(v),
        })
    }

    /// Lay the chart out around `center` with the given outer `radius`.
    #[must_use]
    pub fn layout(&self, center: Point, radius: f64) -> RadarLayout {
        let n = self.axes.len();
        let scale = self.scale();
        let span = scale.max - scale.min;
        let at = |index: usize, r: f64| {
            let angle = TAU * index as f64 / n as f64 - FRAC_PI_2;
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        };

        let axes = self
            .axes
            .iter()
            .enumerate()
            .map(|(i, label)| AxisLine {
                label: label.clone(),
                end: at(i, radius),
                label_anchor: at(i, radius * 1.1),
            })
            .collect();

        let rings = GRID_LEVELS
            .iter()
            .map(|level| (0..n).map(|i| at(i, radius * level)).collect())
            .collect();

        let polygon = self
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, &v)| {
                let fraction = if span > 0.0 { (v - scale.min) / span } else { 0.0 };
                at(i, radius * fraction)
            })
            .collect();

        RadarLayout {
            center,
            radius,
            axes,
            rings,
            polygon,
            scale,
        }
    }
}

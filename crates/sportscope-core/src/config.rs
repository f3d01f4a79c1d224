//! Page configuration.
//!
//! Every field has a default matching the stock `index.html`, so an empty
//! JSON object (or no config at all) is a valid configuration.

use crate::error::ConfigError;
use crate::radar::ScaleRange;
use serde::{Deserialize, Serialize};

/// Top-level configuration handed to the browser app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where the score sheet is fetched from.
    pub data_url: String,
    pub elements: ElementIds,
    pub chart: RadarStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: "./sports.csv".to_string(),
            elements: ElementIds::default(),
            chart: RadarStyle::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_url.trim().is_empty() {
            return Err(ConfigError::Empty("data_url"));
        }
        self.elements.validate()?;

        let ScaleRange { min, max } = self.chart.range;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(())
    }
}

/// DOM element ids and selectors the app binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub table_body: String,
    /// Selector for sortable header cells; each carries a `data-key`.
    pub header_selector: String,
    pub detail_title: String,
    pub detail_subtitle: String,
    pub detail_meta: String,
    pub radar_stats: String,
    pub radar_canvas: String,
    /// Class toggled on the selected table row.
    pub selected_row_class: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            table_body: "sports-table-body".to_string(),
            header_selector: "thead th[data-key]".to_string(),
            detail_title: "detail-title".to_string(),
            detail_subtitle: "detail-subtitle".to_string(),
            detail_meta: "detail-meta".to_string(),
            radar_stats: "radar-stats".to_string(),
            radar_canvas: "radar-canvas".to_string(),
            selected_row_class: "selected-row".to_string(),
        }
    }
}

impl ElementIds {
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("elements.table_body", &self.table_body),
            ("elements.header_selector", &self.header_selector),
            ("elements.detail_title", &self.detail_title),
            ("elements.detail_subtitle", &self.detail_subtitle),
            ("elements.detail_meta", &self.detail_meta),
            ("elements.radar_stats", &self.radar_stats),
            ("elements.radar_canvas", &self.radar_canvas),
            ("elements.selected_row_class", &self.selected_row_class),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::Empty(*name)),
            None => Ok(()),
        }
    }
}

/// Radar chart appearance. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    pub border_color: String,
    pub fill_color: String,
    pub border_width: f64,
    pub point_fill: String,
    pub point_stroke: String,
    pub point_radius: f64,
    pub angle_line_color: String,
    pub grid_color: String,
    pub label_color: String,
    pub label_font: String,
    /// Suggested radial scale.
    pub range: ScaleRange,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            border_color: "rgba(96, 165, 250, 1)".to_string(),
            fill_color: "rgba(59, 130, 246, 0.35)".to_string(),
            border_width: 2.0,
            point_fill: "rgba(248, 250, 252, 1)".to_string(),
            point_stroke: "rgba(15, 23, 42, 1)".to_string(),
            point_radius: 3.5,
            angle_line_color: "rgba(75, 85, 99, 0.7)".to_string(),
            grid_color: "rgba(55, 65, 81, 0.7)".to_string(),
            label_color: "#e5e7eb".to_string(),
            label_font: "11px sans-serif".to_string(),
            range: ScaleRange::default(),
        }
    }
}

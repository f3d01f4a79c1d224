//! Display-ready snapshots of the dashboard state.
//!
//! Every function here is pure: the same records, sort and selection always
//! produce the same views. The whole view is rebuilt after each interaction
//! rather than diffed; the collection is small and projection is cheap.

use crate::format::{format_percent, names_match, title_case};
use crate::metric::Metric;
use crate::radar::RadarChart;
use crate::record::Record;
use crate::selection::Selection;
use crate::sort::{SortDirection, SortField, SortState};
use serde::{Deserialize, Serialize};

/// Indicator shown on the active column when sorted ascending.
pub const ASCENDING_GLYPH: char = '▲';
/// Indicator shown on the active column when sorted descending.
pub const DESCENDING_GLYPH: char = '▼';
/// Opacity of the indicator on inactive columns.
pub const INACTIVE_OPACITY: f32 = 0.25;

/// One metric score formatted for a table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCell {
    pub metric: Metric,
    pub value: f64,
    pub text: String,
}

impl MetricCell {
    fn new(metric: Metric, value: f64) -> Self {
        Self {
            metric,
            value,
            text: format_percent(value),
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowView {
    /// 1-based position in the current order.
    pub rank: usize,
    /// Identifier as loaded, used for selection.
    pub name: String,
    /// Title-cased name for display.
    pub display_name: String,
    pub overall: f64,
    pub overall_text: String,
    /// One cell per metric, in display order.
    pub metrics: Vec<MetricCell>,
    pub is_selected: bool,
}

/// One axis of the detail breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub metric: Metric,
    pub label: String,
    pub value: f64,
    pub text: String,
}

/// Detail panel contents for the selected record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub overall_summary: String,
    /// Always one entry per metric, in display order.
    pub metric_series: Vec<MetricPoint>,
}

/// Sort indicator state for one header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub field: SortField,
    /// The header's `data-key`.
    pub key: String,
    pub glyph: char,
    pub active: bool,
    pub opacity: f32,
}

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<TableRowView>,
    pub detail: Option<DetailView>,
    pub chart: Option<RadarChart>,
}

/// Project the collection into table rows.
#[must_use]
pub fn project_table(records: &[Record], selection: &Selection) -> Vec<TableRowView> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| TableRowView {
            rank: index + 1,
            name: record.name.clone(),
            display_name: title_case(&record.name),
            overall: record.overall,
            overall_text: format_percent(record.overall),
            metrics: record
                .metric_values()
                .map(|(metric, value)| MetricCell::new(metric, value))
                .collect(),
            is_selected: selection
                .name()
                .is_some_and(|selected| names_match(selected, &record.name)),
        })
        .collect()
}

/// Project one record into the detail panel.
#[must_use]
pub fn project_detail(record: &Record) -> DetailView {
    DetailView {
        title: title_case(&record.name),
        subtitle: profile_subtitle(),
        overall_summary: format!("Overall score: {}", format_percent(record.overall)),
        metric_series: record
            .metric_values()
            .map(|(metric, value)| MetricPoint {
                metric,
                label: metric.label().to_string(),
                value,
                text: format_percent(value),
            })
            .collect(),
    }
}

/// Project the sort state into per-column indicators.
#[must_use]
pub fn project_headers(sort: &SortState) -> Vec<HeaderView> {
    SortField::ALL
        .into_iter()
        .map(|field| {
            let active = field == sort.field;
            let glyph = match (active, sort.direction) {
                (true, SortDirection::Descending) => DESCENDING_GLYPH,
                _ => ASCENDING_GLYPH,
            };
            HeaderView {
                field,
                key: field.key().to_string(),
                glyph,
                active,
                opacity: if active { 1.0 } else { INACTIVE_OPACITY },
            }
        })
        .collect()
}

/// "Radar profile across Athletics, Tactics, Spectacle, Pacing, and Rules."
fn profile_subtitle() -> String {
    let labels: Vec<&str> = Metric::ALL.iter().map(|m| m.label()).collect();
    match labels.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("Radar profile across {}, and {last}.", rest.join(", "))
        }
        Some((last, _)) => format!("Radar profile across {last}."),
        None => "Radar profile.".to_string(),
    }
}

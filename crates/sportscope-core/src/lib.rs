//! Core pipeline for the Sportscope dashboard.
//!
//! This crate is target-independent and has no I/O. It provides:
//! - Record parsing: [`parse`], [`parse_with_report`], [`coerce_score`]
//! - Sorting: [`SortState`], [`sort_records`] with a deterministic name tie-break
//! - Selection: [`Selection`]
//! - View projection: [`project_table`], [`project_detail`], [`project_headers`],
//!   [`RadarChart`]
//! - Interaction: [`Dashboard`], an Elm-style [`State`] returning [`Command`]s
//! - Configuration: [`DashboardConfig`]
//!
//! # Example
//!
//! ```
//! use sportscope_core::{Dashboard, SortField};
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.on_data_loaded("Sport,Overall Score\nChess,40%\nBoxing,90%\n");
//! assert_eq!(dashboard.records()[0].name, "Boxing");
//!
//! dashboard.on_header_click(SortField::Name);
//! assert_eq!(dashboard.records()[0].name, "Chess");
//! assert_eq!(dashboard.table()[0].overall_text, "40.00%");
//! ```

mod config;
mod controller;
mod error;
mod format;
mod metric;
mod parser;
mod projection;
mod radar;
mod record;
mod selection;
mod sort;
mod state;

pub use config::{DashboardConfig, ElementIds, RadarStyle};
pub use controller::{Dashboard, DashboardMessage};
pub use error::ConfigError;
pub use format::{format_percent, names_match, title_case};
pub use metric::Metric;
pub use parser::{coerce_score, parse, parse_with_report, ParseReport, NAME_COLUMN, OVERALL_COLUMN};
pub use projection::{
    project_detail, project_headers, project_table, DetailView, HeaderView, MetricCell,
    MetricPoint, Snapshot, TableRowView, ASCENDING_GLYPH, DESCENDING_GLYPH, INACTIVE_OPACITY,
};
pub use radar::{AxisLine, Point, RadarChart, RadarLayout, ScaleRange, GRID_LEVELS};
pub use record::{Collection, Record};
pub use selection::{Selection, SelectionResult};
pub use sort::{collate, compare, sort_records, SortDirection, SortField, SortState};
pub use state::{Command, State};

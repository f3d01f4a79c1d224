//! Interaction controller.
//!
//! [`Dashboard`] is the single owner of the collection, the sort state and
//! the selection. UI bindings call its `on_*` methods and then render
//! whatever the returned [`Command`] asks for; no logic lives in event
//! listeners.

use crate::parser::parse_with_report;
use crate::projection::{
    project_detail, project_headers, project_table, DetailView, HeaderView, Snapshot, TableRowView,
};
use crate::radar::{RadarChart, ScaleRange};
use crate::record::{Collection, Record};
use crate::selection::Selection;
use crate::sort::{sort_records, SortField, SortState};
use crate::state::{Command, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Messages understood by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMessage {
    /// Raw score sheet text arrived.
    DataLoaded(String),
    /// Retrieving the score sheet failed.
    LoadFailed(String),
    /// A sortable column header was clicked.
    HeaderClicked(SortField),
    /// A table row was clicked.
    RowClicked(String),
}

/// Process-wide dashboard state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    records: Collection,
    sort: SortState,
    selection: Selection,
    scale: ScaleRange,
}

impl Dashboard {
    /// Create an empty dashboard sorted by overall score, descending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suggested radar scale used for chart projections.
    #[must_use]
    pub const fn with_scale(mut self, scale: ScaleRange) -> Self {
        self.scale = scale;
        self
    }

    /// Records in their current order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn sort_state(&self) -> SortState {
        self.sort
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected record, if it is still in the collection.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        self.selection.resolve(&self.records)
    }

    /// Load raw text: parse, sort, and auto-select the first record.
    pub fn on_data_loaded(&mut self, text: impl Into<String>) -> Command {
        self.update(DashboardMessage::DataLoaded(text.into()))
    }

    /// Record a retrieval failure and fall back to an empty dashboard.
    pub fn on_load_failed(&mut self, reason: impl Into<String>) -> Command {
        self.update(DashboardMessage::LoadFailed(reason.into()))
    }

    /// Header click on `field`.
    pub fn on_header_click(&mut self, field: SortField) -> Command {
        self.update(DashboardMessage::HeaderClicked(field))
    }

    /// Header click identified by its `data-key`; unknown keys are ignored.
    pub fn on_header_key(&mut self, key: &str) -> Command {
        match SortField::from_key(key) {
            Some(field) => self.on_header_click(field),
            None => {
                debug!(key, "ignoring click on unknown column");
                Command::None
            }
        }
    }

    /// Row click on the record named `name`.
    pub fn on_row_click(&mut self, name: impl Into<String>) -> Command {
        self.update(DashboardMessage::RowClicked(name.into()))
    }

    /// Table rows for the current state.
    #[must_use]
    pub fn table(&self) -> Vec<TableRowView> {
        project_table(&self.records, &self.selection)
    }

    /// Header sort indicators for the current state.
    #[must_use]
    pub fn headers(&self) -> Vec<HeaderView> {
        project_headers(&self.sort)
    }

    /// Detail panel for the selected record.
    #[must_use]
    pub fn detail(&self) -> Option<DetailView> {
        self.selected_record().map(project_detail)
    }

    /// Radar chart for the selected record.
    #[must_use]
    pub fn chart(&self) -> Option<RadarChart> {
        self.detail()
            .map(|detail| RadarChart::from_detail(&detail, self.scale))
    }

    /// All projections at once.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let detail = self.detail();
        let chart = detail
            .as_ref()
            .map(|detail| RadarChart::from_detail(detail, self.scale));
        Snapshot {
            headers: self.headers(),
            rows: self.table(),
            detail,
            chart,
        }
    }

    fn resort(&mut self) {
        sort_records(&mut self.records, self.sort.field, self.sort.direction);
    }
}

impl State for Dashboard {
    type Message = DashboardMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            DashboardMessage::DataLoaded(text) => {
                let report = parse_with_report(&text);
                info!(
                    records = report.records.len(),
                    skipped = report.skipped_lines,
                    "score sheet loaded"
                );
                self.records = report.records;
                self.resort();

                self.selection = Selection::new();
                if let Some(first) = self.records.first().map(|r| r.name.clone()) {
                    self.selection.select(&self.records, &first);
                }
                Command::render_all()
            }
            DashboardMessage::LoadFailed(reason) => {
                error!(%reason, "failed to load score sheet");
                self.records.clear();
                self.selection = Selection::new();
                Command::render_all()
            }
            DashboardMessage::HeaderClicked(field) => {
                self.sort.click(field);
                debug!(field = %self.sort.field, direction = ?self.sort.direction, "sorting");
                self.resort();
                Command::RenderTable
            }
            DashboardMessage::RowClicked(name) => {
                if self.selection.select(&self.records, &name).is_some() {
                    // The table re-renders too so the highlight follows.
                    Command::render_all()
                } else {
                    debug!(%name, "ignoring click on stale row");
                    Command::None
                }
            }
        }
    }
}

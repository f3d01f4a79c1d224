//! The currently active record.

use crate::metric::Metric;
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Name of the record shown in the detail view, if any.
///
/// Selection is by identity, not position, so it survives re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    name: Option<String>,
}

/// Outcome of a successful [`Selection::select`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionResult<'a> {
    /// The matched record.
    pub record: &'a Record,
    /// Its metric scores, in display order.
    pub metrics: [(Metric, f64); Metric::COUNT],
}

impl Selection {
    /// An empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { name: None }
    }

    /// Selected name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Select the record whose name is exactly `name`.
    ///
    /// Returns `None` and leaves the selection untouched when no record
    /// matches; a stale name is not an error.
    pub fn select<'a>(&mut self, records: &'a [Record], name: &str) -> Option<SelectionResult<'a>> {
        let record = records.iter().find(|r| r.name == name)?;
        self.name = Some(record.name.clone());
        Some(SelectionResult {
            record,
            metrics: Metric::ALL.map(|m| (m, record.metric(m))),
        })
    }

    /// The selected record in the current collection, if it is still present.
    #[must_use]
    pub fn resolve<'a>(&self, records: &'a [Record]) -> Option<&'a Record> {
        let name = self.name.as_deref()?;
        records.iter().find(|r| r.name == name)
    }
}

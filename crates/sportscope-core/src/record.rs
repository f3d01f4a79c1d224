//! Typed score records.

use crate::metric::Metric;
use serde::{Deserialize, Serialize};

/// One subject's full score profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, case preserved as read from the source.
    pub name: String,
    /// Overall score, nominally 0-100.
    pub overall: f64,
    /// One score per metric, indexed by [`Metric::index`].
    pub metrics: [f64; Metric::COUNT],
}

/// The ordered set of records currently loaded.
pub type Collection = Vec<Record>;

impl Record {
    /// Create a record with every score at zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overall: 0.0,
            metrics: [0.0; Metric::COUNT],
        }
    }

    /// Set the overall score.
    #[must_use]
    pub const fn with_overall(mut self, overall: f64) -> Self {
        self.overall = overall;
        self
    }

    /// Set a single metric score.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        self.metrics[metric.index()] = value;
        self
    }

    /// Score for one metric.
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> f64 {
        self.metrics[metric.index()]
    }

    /// Metric scores paired with their metric, in display order.
    pub fn metric_values(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.metric(m)))
    }
}

//! The fixed set of scored dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five evaluation dimensions every record is scored on.
///
/// Declaration order is significant: it is the table column order and the
/// radar axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Athletics,
    Tactics,
    Spectacle,
    Pacing,
    Rules,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Self; 5] = [
        Self::Athletics,
        Self::Tactics,
        Self::Spectacle,
        Self::Pacing,
        Self::Rules,
    ];

    /// Number of metrics.
    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Tactics => "Tactics",
            Self::Spectacle => "Spectacle",
            Self::Pacing => "Pacing",
            Self::Rules => "Rules",
        }
    }

    /// Lowercase key, as used by `data-key` attributes on header cells.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Athletics => "athletics",
            Self::Tactics => "tactics",
            Self::Spectacle => "spectacle",
            Self::Pacing => "pacing",
            Self::Rules => "rules",
        }
    }

    /// Exact header label of this metric's column in the source text.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Athletics => "Athletics Score",
            Self::Tactics => "Tactics Score",
            Self::Spectacle => "Spectacle Score",
            Self::Pacing => "Pacing Score",
            Self::Rules => "Rules Score",
        }
    }

    /// Position of this metric in [`Metric::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a metric by its key, ignoring ASCII case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

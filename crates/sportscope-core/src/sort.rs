//! In-place ordering of the record collection.

use crate::metric::Metric;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Column a collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// The identifying name column.
    Name,
    /// The overall score.
    Overall,
    /// One of the metric scores.
    Metric(Metric),
}

impl SortField {
    /// Every sortable column, in table order.
    pub const ALL: [Self; 2 + Metric::COUNT] = [
        Self::Name,
        Self::Overall,
        Self::Metric(Metric::Athletics),
        Self::Metric(Metric::Tactics),
        Self::Metric(Metric::Spectacle),
        Self::Metric(Metric::Pacing),
        Self::Metric(Metric::Rules),
    ];

    /// Header `data-key` of this column.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "sport",
            Self::Overall => "overall",
            Self::Metric(metric) => metric.key(),
        }
    }

    /// Resolve a header `data-key`, ignoring ASCII case.
    ///
    /// Both `sport` and `name` address the name column.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.eq_ignore_ascii_case("sport") || key.eq_ignore_ascii_case("name") {
            Some(Self::Name)
        } else if key.eq_ignore_ascii_case("overall") {
            Some(Self::Overall)
        } else {
            Metric::from_key(key).map(Self::Metric)
        }
    }

    /// Numeric value of this field, or `None` for the name column.
    #[must_use]
    pub const fn value(self, record: &Record) -> Option<f64> {
        match self {
            Self::Name => None,
            Self::Overall => Some(record.overall),
            Self::Metric(metric) => Some(record.metric(metric)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Current ordering of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click transition: toggle on the active column, otherwise switch
    /// to the new column in descending order.
    pub fn click(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortField::Overall, SortDirection::Descending)
    }
}

/// Locale-style name ordering.
///
/// Names compare with case and common Latin accents folded away, so `élan`
/// sorts between `elan` and `fencing`. Remaining ties put the unaccented
/// spelling first, then lowercase before uppercase. Letters outside the
/// folded set still compare by code point.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let (lower_a, lower_b) = (a.to_lowercase(), b.to_lowercase());
    fold_accents(&lower_a)
        .cmp(fold_accents(&lower_b))
        .then_with(|| lower_a.cmp(&lower_b))
        .then_with(|| b.cmp(a))
}

fn fold_accents(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().map(|c| match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'š' | 'ś' => 's',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    })
}

/// Compare two records by `field` in `direction`.
///
/// Ties always fall back to ascending name order, whatever the direction,
/// so repeated sorts never shuffle tied rows.
#[must_use]
pub fn compare(a: &Record, b: &Record, field: SortField, direction: SortDirection) -> Ordering {
    let primary = match (field.value(a), field.value(b)) {
        (Some(x), Some(y)) => direction.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        _ => direction.apply(collate(&a.name, &b.name)),
    };
    primary.then_with(|| collate(&a.name, &b.name))
}

/// Reorder `records` in place.
pub fn sort_records(records: &mut [Record], field: SortField, direction: SortDirection) {
    records.sort_unstable_by(|a, b| compare(a, b, field, direction));
}

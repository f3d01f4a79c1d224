//! Comma-delimited score sheet parsing.
//!
//! The parser is total: any input produces a (possibly empty) collection.
//! Malformed numeric cells become `0.0` and lines without a name are
//! dropped, so one bad row never aborts a load.

use crate::metric::Metric;
use crate::record::{Collection, Record};
use tracing::{debug, warn};

/// Header label of the identifying column.
pub const NAME_COLUMN: &str = "Sport";

/// Header label of the overall score column.
pub const OVERALL_COLUMN: &str = "Overall Score";

const DELIMITER: char = ',';

/// Parser output plus data-quality counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Parsed records, in source order.
    pub records: Collection,
    /// Data lines dropped because their name cell was missing or empty.
    pub skipped_lines: usize,
    /// Expected header labels that were not present.
    pub missing_columns: Vec<&'static str>,
}

/// Column positions resolved from the header line.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: Option<usize>,
    overall: Option<usize>,
    metrics: [Option<usize>; Metric::COUNT],
}

impl ColumnMap {
    fn from_header(header: &str) -> Self {
        let labels: Vec<&str> = header.split(DELIMITER).map(str::trim).collect();
        let position = |label: &str| labels.iter().position(|l| *l == label);

        Self {
            name: position(NAME_COLUMN),
            overall: position(OVERALL_COLUMN),
            metrics: Metric::ALL.map(|m| position(m.column())),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(NAME_COLUMN);
        }
        if self.overall.is_none() {
            missing.push(OVERALL_COLUMN);
        }
        for metric in Metric::ALL {
            if self.metrics[metric.index()].is_none() {
                missing.push(metric.column());
            }
        }
        missing
    }
}

/// Parse raw text into records.
#[must_use]
pub fn parse(raw: &str) -> Collection {
    parse_with_report(raw).records
}

/// Parse raw text into records, also reporting what was skipped.
#[must_use]
pub fn parse_with_report(raw: &str) -> ParseReport {
    let mut lines = raw.split('\n').map(str::trim).filter(|l| !l.is_empty());

    let Some(header) = lines.next() else {
        return ParseReport::default();
    };
    let columns = ColumnMap::from_header(header);

    let mut report = ParseReport::default();
    let mut saw_data = false;

    for (offset, line) in lines.enumerate() {
        saw_data = true;
        let cells: Vec<&str> = line.split(DELIMITER).collect();
        let cell = |index: Option<usize>| index.and_then(|i| cells.get(i).copied());

        let name = match cell(columns.name) {
            Some(name) if !name.is_empty() => name,
            _ => {
                debug!(row = offset + 1, "skipping row without a name");
                report.skipped_lines += 1;
                continue;
            }
        };

        let mut record = Record::new(name).with_overall(coerce_cell(cell(columns.overall)));
        for metric in Metric::ALL {
            record.metrics[metric.index()] = coerce_cell(cell(columns.metrics[metric.index()]));
        }
        report.records.push(record);
    }

    // A header on its own is an empty sheet, not a sheet with missing columns.
    if saw_data {
        report.missing_columns = columns.missing();
        if !report.missing_columns.is_empty() {
            warn!(columns = ?report.missing_columns, "score sheet is missing columns, defaulting to 0");
        }
    }

    report
}

fn coerce_cell(cell: Option<&str>) -> f64 {
    cell.map_or(0.0, coerce_score)
}

/// Lenient score conversion.
///
/// Strips surrounding whitespace and one trailing `%`, then parses a decimal
/// number. Anything that does not yield a finite number becomes `0.0`.
#[must_use]
pub fn coerce_score(text: &str) -> f64 {
    let text = text.trim();
    let text = text.strip_suffix('%').unwrap_or(text).trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

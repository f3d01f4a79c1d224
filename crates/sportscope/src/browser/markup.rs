//! Text and class names written into the page.

use sportscope_core::{DetailView, TableRowView};

/// Attribute carrying a row's record name.
pub const ROW_NAME_ATTR: &str = "data-name";
/// Attribute carrying a header's sort key.
pub const HEADER_KEY_ATTR: &str = "data-key";

pub const SORT_LABEL_CLASS: &str = "sort-label";
pub const SORT_INDICATOR_CLASS: &str = "sort-indicator";
pub const STAT_ITEM_CLASS: &str = "radar-stat-item";
pub const STAT_LABEL_CLASS: &str = "radar-stat-label";
pub const STAT_VALUE_CLASS: &str = "radar-stat-value";

/// Detail title shown while nothing is selected.
pub const EMPTY_TITLE: &str = "No sport selected";
pub const EMPTY_SUBTITLE: &str = "Click a row to see its radar profile.";

/// Cell texts of one table row, left to right.
pub fn row_cells(row: &TableRowView) -> Vec<String> {
    let mut cells = Vec::with_capacity(3 + row.metrics.len());
    cells.push(row.rank.to_string());
    cells.push(row.display_name.clone());
    cells.push(row.overall_text.clone());
    cells.extend(row.metrics.iter().map(|cell| cell.text.clone()));
    cells
}

/// Title, subtitle and summary lines of the detail panel.
pub fn detail_lines(detail: Option<&DetailView>) -> [String; 3] {
    match detail {
        Some(detail) => [
            detail.title.clone(),
            detail.subtitle.clone(),
            detail.overall_summary.clone(),
        ],
        None => [EMPTY_TITLE.to_string(), EMPTY_SUBTITLE.to_string(), String::new()],
    }
}

/// Canvas `textAlign` for an axis label anchored at `anchor_x`.
pub fn label_align(anchor_x: f64, center_x: f64) -> &'static str {
    const EPSILON: f64 = 1.0;
    if anchor_x < center_x - EPSILON {
        "right"
    } else if anchor_x > center_x + EPSILON {
        "left"
    } else {
        "center"
    }
}

/// CSS value for an indicator opacity.
pub fn opacity_css(opacity: f32) -> String {
    format!("{opacity}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportscope_core::{project_detail, project_table, Metric, Record, Selection};

    fn ice_hockey() -> Record {
        Record::new("ice hockey")
            .with_overall(73.4)
            .with_metric(Metric::Athletics, 92.0)
    }

    #[test]
    fn test_row_cells_order() {
        let rows = project_table(&[ice_hockey()], &Selection::new());
        let cells = row_cells(&rows[0]);

        assert_eq!(cells.len(), 3 + Metric::COUNT);
        assert_eq!(cells[0], "1");
        assert_eq!(cells[1], "Ice Hockey");
        assert_eq!(cells[2], "73.40%");
        assert_eq!(cells[3], "92.00%");
        assert_eq!(cells[7], "0.00%");
    }

    #[test]
    fn test_detail_lines() {
        let detail = project_detail(&ice_hockey());
        let [title, subtitle, summary] = detail_lines(Some(&detail));
        assert_eq!(title, "Ice Hockey");
        assert!(subtitle.starts_with("Radar profile across Athletics"));
        assert_eq!(summary, "Overall score: 73.40%");
    }

    #[test]
    fn test_detail_lines_empty() {
        let [title, _, summary] = detail_lines(None);
        assert_eq!(title, EMPTY_TITLE);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_label_align() {
        assert_eq!(label_align(100.0, 100.0), "center");
        assert_eq!(label_align(100.5, 100.0), "center");
        assert_eq!(label_align(40.0, 100.0), "right");
        assert_eq!(label_align(160.0, 100.0), "left");
    }

    #[test]
    fn test_opacity_css() {
        assert_eq!(opacity_css(1.0), "1");
        assert_eq!(opacity_css(0.25), "0.25");
    }
}

//! Integration tests for sportscope-core.
//!
//! These tests drive the public API end-to-end, from raw text to projections.

use sportscope_core::{
    parse, parse_with_report, project_table, sort_records, Command, Dashboard, DashboardConfig,
    Metric, Point, Record, Selection, SortDirection, SortField, SortState, State,
};
use test_log::test;

const SHEET: &str = "Sport,Overall Score,Athletics Score,Tactics Score,Spectacle Score,Pacing Score,Rules Score\n\
    Chess,40%,10%,99%,20%,15%,90%\n\
    Boxing,90%,95%,50%,88%,70%,60%\n\
    Archery,40%,60%,45%,30%,25%,80%\n\
    ice hockey,73.4%,92%,70%,95%,90%,55%\n";

// =============================================================================
// End-to-end Scenario
// =============================================================================

#[test]
fn test_two_sport_scenario() {
    let mut dashboard = Dashboard::new();
    let cmd =
        dashboard.on_data_loaded("Sport,Overall Score,Athletics Score\nChess,40%,10%\nBoxing,90%,95%\n");
    assert!(cmd.renders_table());
    assert!(cmd.renders_detail());

    assert_eq!(dashboard.records().len(), 2);
    assert_eq!(
        dashboard.sort_state(),
        SortState::new(SortField::Overall, SortDirection::Descending)
    );

    let rows = dashboard.table();
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "Boxing");
    assert_eq!(rows[0].overall_text, "90.00%");
    assert_eq!(rows[1].rank, 2);
    assert_eq!(rows[1].name, "Chess");
    assert_eq!(rows[1].overall_text, "40.00%");

    assert_eq!(dashboard.selection().name(), Some("Boxing"));
    let detail = dashboard.detail().expect("Boxing is selected");
    let athletics = detail
        .metric_series
        .iter()
        .find(|p| p.metric == Metric::Athletics)
        .expect("athletics point");
    assert_eq!(athletics.text, "95.00%");
    assert_eq!(detail.metric_series.len(), Metric::COUNT);
}

#[test]
fn test_full_session() {
    let mut dashboard = Dashboard::new();
    dashboard.on_data_loaded(SHEET);

    let names: Vec<_> = dashboard.table().into_iter().map(|r| r.display_name).collect();
    assert_eq!(names, ["Boxing", "Ice Hockey", "Archery", "Chess"]);
    assert_eq!(dashboard.selection().name(), Some("Boxing"));

    // Rows are selected by raw record name, not the display name.
    assert!(dashboard.on_row_click("Ice Hockey").is_none());
    assert!(!dashboard.on_row_click("ice hockey").is_none());
    assert_eq!(dashboard.detail().map(|d| d.title), Some("Ice Hockey".to_string()));
    assert_eq!(
        dashboard.detail().map(|d| d.overall_summary),
        Some("Overall score: 73.40%".to_string())
    );

    assert_eq!(dashboard.on_header_key("spectacle"), Command::RenderTable);
    let rows = dashboard.table();
    assert_eq!(rows[0].name, "ice hockey");
    assert!(rows[0].is_selected);

    let headers = dashboard.headers();
    let active: Vec<_> = headers.iter().filter(|h| h.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].key, "spectacle");
    assert_eq!(active[0].glyph, '▼');
}

// =============================================================================
// Parser Properties
// =============================================================================

#[test]
fn test_header_only_is_empty() {
    assert!(parse("Sport,Overall Score,Athletics Score").is_empty());
    assert!(parse("").is_empty());
    assert!(parse("\n\n  \n").is_empty());
}

#[test]
fn test_numeric_leniency() {
    let records = parse("Sport,Overall Score\nA,abc\nB,\nC,%\nD,73.4%\n");
    let overall: Vec<_> = records.iter().map(|r| r.overall).collect();
    assert_eq!(overall, [0.0, 0.0, 0.0, 73.4]);
}

#[test]
fn test_row_skip_and_absent_columns() {
    let report = parse_with_report("Sport,Overall Score,Tactics Score\n,50%,50%\nChess,40%,99%\n");
    assert_eq!(report.skipped_lines, 1);
    assert_eq!(report.records.len(), 1);

    let chess = &report.records[0];
    assert_eq!(chess.metric(Metric::Tactics), 99.0);
    for metric in [Metric::Athletics, Metric::Spectacle, Metric::Pacing, Metric::Rules] {
        assert_eq!(chess.metric(metric), 0.0);
    }
    assert!(report.missing_columns.contains(&"Athletics Score"));
}

#[test]
fn test_crlf_input() {
    let records = parse("Sport,Overall Score\r\nChess,40%\r\nBoxing,90%\r\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "Boxing");
    assert_eq!(records[1].overall, 90.0);
}

// =============================================================================
// Sort Properties
// =============================================================================

#[test]
fn test_tie_break_ascending_both_directions() {
    let mut records = vec![
        Record::new("Chess").with_overall(40.0),
        Record::new("Archery").with_overall(40.0),
    ];

    sort_records(&mut records, SortField::Overall, SortDirection::Descending);
    assert_eq!(records[0].name, "Archery");

    sort_records(&mut records, SortField::Overall, SortDirection::Ascending);
    assert_eq!(records[0].name, "Archery");
}

#[test]
fn test_toggle_twice_restores_default() {
    let mut dashboard = Dashboard::new();
    dashboard.on_data_loaded(SHEET);

    dashboard.on_header_click(SortField::Overall);
    dashboard.on_header_click(SortField::Overall);
    assert_eq!(dashboard.sort_state(), SortState::default());
}

#[test]
fn test_selection_survives_resort() {
    let mut dashboard = Dashboard::new();
    dashboard.on_data_loaded(SHEET);
    dashboard.on_row_click("Chess");
    let rank_before = dashboard.table().iter().find(|r| r.is_selected).map(|r| r.rank);

    dashboard.on_header_click(SortField::Metric(Metric::Tactics));
    let rank_after = dashboard.table().iter().find(|r| r.is_selected).map(|r| r.rank);

    assert_eq!(dashboard.selection().name(), Some("Chess"));
    assert_eq!(rank_before, Some(4));
    assert_eq!(rank_after, Some(1));
}

// =============================================================================
// Projection Properties
// =============================================================================

#[test]
fn test_projection_is_pure() {
    let records = parse(SHEET);
    let mut selection = Selection::new();
    selection.select(&records, "Archery");

    assert_eq!(project_table(&records, &selection), project_table(&records, &selection));
}

#[test]
fn test_snapshot_serializes() {
    let mut dashboard = Dashboard::new();
    dashboard.on_data_loaded(SHEET);

    let json = serde_json::to_value(dashboard.snapshot()).expect("snapshot is serializable");
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["detail"]["title"], "Boxing");
    assert_eq!(json["chart"]["axes"][0], "Athletics");
}

#[test]
fn test_chart_layout_from_config() {
    let config = DashboardConfig::from_json(r#"{"chart": {"range": {"min": 0, "max": 100}}}"#)
        .expect("valid config");
    let mut dashboard = Dashboard::new().with_scale(config.chart.range);
    dashboard.on_data_loaded(SHEET);

    let chart = dashboard.chart().expect("a record is selected");
    let layout = chart.layout(Point::new(100.0, 100.0), 50.0);
    assert_eq!(layout.axes.len(), Metric::COUNT);
    assert_eq!(layout.polygon.len(), Metric::COUNT);

    // First axis points straight up.
    assert!((layout.axes[0].end.x - 100.0).abs() < 1e-9);
    assert!((layout.axes[0].end.y - 50.0).abs() < 1e-9);
}

#[test]
fn test_state_trait_dispatch() {
    fn drive<S: State>(state: &mut S, msgs: Vec<S::Message>) -> Vec<Command> {
        msgs.into_iter().map(|m| state.update(m)).collect()
    }

    let mut dashboard = Dashboard::new();
    let commands = drive(
        &mut dashboard,
        vec![
            sportscope_core::DashboardMessage::DataLoaded(SHEET.to_string()),
            sportscope_core::DashboardMessage::RowClicked("Nope".to_string()),
        ],
    );
    assert_eq!(commands[0], Command::render_all());
    assert!(commands[1].is_none());
}

//! Benchmarks for the parse, sort and project pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sportscope_core::{
    parse, project_table, sort_records, Dashboard, Metric, Point, Selection, SortDirection,
    SortField,
};

fn score_sheet(rows: usize) -> String {
    let mut text = String::from(
        "Sport,Overall Score,Athletics Score,Tactics Score,Spectacle Score,Pacing Score,Rules Score\n",
    );
    for i in 0..rows {
        let base = (i * 37 % 100) as f64;
        text.push_str(&format!(
            "sport {i},{base:.1}%,{:.1}%,{:.1}%,{:.1}%,{:.1}%,{:.1}%\n",
            (base + 11.0) % 100.0,
            (base + 23.0) % 100.0,
            (base + 5.0) % 100.0,
            (base + 47.0) % 100.0,
            (base + 71.0) % 100.0,
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = score_sheet(200);

    c.bench_function("parse_200", |b| b.iter(|| parse(black_box(&text))));
}

fn bench_sort(c: &mut Criterion) {
    let records = parse(&score_sheet(200));

    c.bench_function("sort_200_by_metric", |b| {
        b.iter(|| {
            let mut records = records.clone();
            sort_records(
                black_box(&mut records),
                SortField::Metric(Metric::Tactics),
                SortDirection::Descending,
            );
            records
        })
    });
}

fn bench_project_table(c: &mut Criterion) {
    let records = parse(&score_sheet(200));
    let mut selection = Selection::new();
    selection.select(&records, "sport 42");

    c.bench_function("project_table_200", |b| {
        b.iter(|| project_table(black_box(&records), black_box(&selection)))
    });
}

fn bench_header_click(c: &mut Criterion) {
    let mut dashboard = Dashboard::new();
    dashboard.on_data_loaded(score_sheet(200));

    c.bench_function("header_click_and_snapshot", |b| {
        b.iter(|| {
            dashboard.on_header_click(black_box(SortField::Name));
            dashboard.snapshot()
        })
    });
}

fn bench_radar_layout(c: &mut Criterion) {
    let mut dashboard = Dashboard::new();
    dashboard.on_data_loaded(score_sheet(10));
    let Some(chart) = dashboard.chart() else {
        return;
    };

    c.bench_function("radar_layout", |b| {
        b.iter(|| chart.layout(black_box(Point::new(160.0, 160.0)), black_box(120.0)))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_sort,
    bench_project_table,
    bench_header_click,
    bench_radar_layout,
);
criterion_main!(benches);

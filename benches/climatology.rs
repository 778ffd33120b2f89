use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use power_climatology::{
    CalendarDay, CalendarDayFilterExt, ClimatologyAggregator, DailySeries, ParameterSet, Thresholds,
};

/// Forty years of daily values for every parameter the aggregator reads.
fn history() -> ParameterSet {
    let start = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();

    let mut set = ParameterSet::new();
    for (name, base) in [("T2M", 20.0), ("T2MDEW", 12.0), ("WS2M", 4.0), ("QV2M", 9.0)] {
        let series: DailySeries = days
            .iter()
            .enumerate()
            .map(|(i, d)| (*d, base + (i % 17) as f64 * 0.25))
            .collect();
        set.insert(name, series);
    }
    set
}

fn bench_aggregation(c: &mut Criterion) {
    let set = history();
    let day = CalendarDay::new(7, 15).unwrap();
    let aggregator = ClimatologyAggregator::new(Thresholds::default());

    c.bench_function("filter_calendar_day", |b| {
        b.iter(|| black_box(&set).filter_calendar_day(black_box(day)))
    });
    c.bench_function("aggregate_day", |b| {
        b.iter(|| aggregator.aggregate_day(black_box(&set), black_box(day)))
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);

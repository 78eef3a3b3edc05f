use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tick_axis_rs::api::{TickEngine, TickEngineConfig};
use tick_axis_rs::core::{TickRequest, TimeRange};

const MONTH_START: i64 = 1_680_307_200; // 2023-04-01 00:00:00 UTC
const DAY_SECONDS: i64 = 86_400;

fn bench_month_window_tick_selection(c: &mut Criterion) {
    let engine = TickEngine::new(TickEngineConfig::new()).expect("engine init");
    let range = TimeRange::new(MONTH_START, MONTH_START + 30 * DAY_SECONDS).expect("valid range");
    let request = TickRequest::new(range, 8).expect("valid request");

    c.bench_function("month_window_tick_selection", |b| {
        b.iter(|| {
            let _ = engine
                .select_ticks(black_box(request))
                .expect("tick selection should succeed");
        })
    });
}

fn bench_minute_window_tick_labels(c: &mut Criterion) {
    let engine = TickEngine::new(TickEngineConfig::new()).expect("engine init");
    let range = TimeRange::new(MONTH_START, MONTH_START + 2_400).expect("valid range");
    let request = TickRequest::new(range, 6).expect("valid request");
    let ticks = engine.select_ticks(request).expect("tick selection");

    c.bench_function("minute_window_tick_labels", |b| {
        b.iter(|| {
            let _ = engine
                .tick_labels(black_box(&ticks))
                .expect("labels should succeed");
        })
    });
}

fn bench_quarter_weekend_regions(c: &mut Criterion) {
    let engine = TickEngine::new(TickEngineConfig::new()).expect("engine init");
    let range = TimeRange::new(MONTH_START, MONTH_START + 90 * DAY_SECONDS).expect("valid range");

    c.bench_function("quarter_weekend_regions", |b| {
        b.iter(|| {
            let _ = engine
                .weekend_regions(black_box(range))
                .expect("regions should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_month_window_tick_selection,
    bench_minute_window_tick_labels,
    bench_quarter_weekend_regions
);
criterion_main!(benches);

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use gantt_rs::api::{GanttEngine, GanttEngineConfig};
use gantt_rs::core::{GridMetrics, PeriodRegistry, Task, Timeline};
use std::hint::black_box;

fn reference() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2022, 1, 13)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .expect("valid reference date")
}

fn bench_month_layout_build(c: &mut Criterion) {
    let registry = PeriodRegistry::standard();
    let months = registry.get("months").expect("standard preset").clone();
    let timeline =
        Timeline::new(months, reference(), GridMetrics::default()).expect("valid timeline");
    let row_heights = vec![40.0; 32];

    c.bench_function("month_layout_build", |b| {
        b.iter(|| {
            let _ = timeline.build_layout(black_box(&row_heights));
        })
    });
}

fn bench_pixel_round_trip(c: &mut Criterion) {
    let engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");

    c.bench_function("pixel_round_trip", |b| {
        b.iter(|| {
            let date = engine
                .date_from_pixel(black_box(1234.5))
                .expect("to instant");
            let _ = engine.pixel_from_date(date).expect("to pixel");
        })
    });
}

fn bench_engine_snapshot_json_2k(c: &mut Criterion) {
    let mut engine = GanttEngine::new(GanttEngineConfig::new()).expect("engine init");

    let base = reference().timestamp() as f64;
    for i in 0..2_000u32 {
        let start = base + f64::from(i) * 600.0;
        let task = Task::new(format!("task-{i}"), start, start + 7_200.0, f64::from(i % 16))
            .expect("valid generated task");
        engine.add_task(task);
    }

    c.bench_function("engine_snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_contract_v1_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_month_layout_build,
    bench_pixel_round_trip,
    bench_engine_snapshot_json_2k
);
criterion_main!(benches);

//! Performance benchmarks for the shift pay engine.
//!
//! Covers the pure calculation path and the HTTP path:
//! - Slicing and pricing a single shift
//! - Aggregating a month of shifts
//! - A period summary request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_pay::api::{AppState, create_router};
use shift_pay::calculation::{aggregate, compute_pay};
use shift_pay::config::{ConfigLoader, RateTable};
use shift_pay::models::Shift;

use axum::{body::Body, http::Request};
use chrono::{Days, NaiveDate};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/shift_rates").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` early shifts on consecutive days from Monday 2024-03-04.
fn create_shifts(count: usize) -> Vec<Shift> {
    let first = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    (0..count)
        .map(|i| {
            let date = first + Days::new(i as u64 % 28);
            Shift::parse(
                &format!("shift_{:03}", i + 1),
                &date.format("%Y-%m-%d").to_string(),
                "06:00",
                "14:35",
            )
            .unwrap()
        })
        .collect()
}

/// Creates a period summary request body for `count` shifts.
fn create_summary_body(count: usize) -> String {
    let shifts: Vec<serde_json::Value> = create_shifts(count)
        .iter()
        .map(|shift| {
            serde_json::json!({
                "id": shift.id,
                "date": shift.date.format("%Y-%m-%d").to_string(),
                "start": shift.start.format("%H:%M").to_string(),
                "end": shift.end.format("%H:%M").to_string()
            })
        })
        .collect();

    serde_json::json!({
        "period": {"start_date": "2024-03-01", "end_date": "2024-03-31"},
        "shifts": shifts
    })
    .to_string()
}

/// Benchmark: pricing one 8.5 hour shift.
fn bench_single_shift(c: &mut Criterion) {
    let shift = create_shifts(1).remove(0);
    let rates = RateTable::shift_pay();

    c.bench_function("compute_pay_single_shift", |b| {
        b.iter(|| black_box(compute_pay(black_box(&shift), &rates).unwrap()))
    });
}

/// Benchmark: aggregating increasing numbers of shifts.
fn bench_aggregate_scaling(c: &mut Criterion) {
    let rates = RateTable::period_summary();
    let mut group = c.benchmark_group("aggregate");

    for shift_count in [1, 7, 28, 100].iter() {
        let shifts = create_shifts(*shift_count);

        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            shift_count,
            |b, _| b.iter(|| black_box(aggregate(&shifts, &rates).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: a month summary through the router.
fn bench_period_summary_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_summary_body(28);

    c.bench_function("period_summary_request_28_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/periods/summary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_shift,
    bench_aggregate_scaling,
    bench_period_summary_request,
);
criterion_main!(benches);

//! Performance benchmarks for the payroll engine.
//!
//! Targets:
//! - Period report for one employee with a month of logs: < 100μs mean
//! - Batch report of 100 employees: < 10ms mean
//! - Batch report of 1000 employees: < 100ms mean
//! - Termination calculation: < 50μs mean
//! - Period report through the HTTP router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bordro_engine::api::{create_router, AppState};
use bordro_engine::calculation::{
    compute_batch_report, compute_period_report, compute_termination, TerminationParams, WorkRules,
};
use bordro_engine::config::ConfigLoader;
use bordro_engine::export::batch_csv_string;
use bordro_engine::models::{Employee, TimeLog};

use axum::{body::Body, http::Request};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/tr").expect("Failed to load config");
    AppState::new(config)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Creates an employee with one log for each of the first `log_count` days of January 2025.
fn create_employee(index: usize, log_count: u64) -> Employee {
    let mut employee = Employee::new(format!("emp_{:04}", index), format!("Personel {}", index));
    employee.hire_date = Some(date("2020-01-15"));
    employee.base_salary = Decimal::new(30000, 0);
    employee.hourly_rate = Decimal::new(13333, 2);
    employee.time_logs = (0..log_count)
        .map(|offset| TimeLog {
            id: format!("log_{:03}", offset),
            date: date("2025-01-01") + Days::new(offset),
            check_in: Some("08:30".to_string()),
            check_out: Some(if offset % 3 == 0 { "19:00" } else { "17:00" }.to_string()),
        })
        .collect();
    employee
}

fn create_roster(size: usize) -> Vec<Employee> {
    (0..size).map(|i| create_employee(i, 22)).collect()
}

/// Benchmark: Period report for one employee over a month.
fn bench_period_report(c: &mut Criterion) {
    let employee = create_employee(0, 31);
    let rules = WorkRules::default();

    c.bench_function("period_report_31_logs", |b| {
        b.iter(|| {
            compute_period_report(
                black_box(&employee),
                date("2025-01-01"),
                date("2025-01-31"),
                &rules,
            )
        })
    });
}

/// Benchmark: Batch reports at increasing roster sizes.
fn bench_batch(c: &mut Criterion) {
    let rules = WorkRules::default();
    let mut group = c.benchmark_group("batch_report");

    for size in [10usize, 100, 1000].iter() {
        let roster = create_roster(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), size, |b, _| {
            b.iter(|| {
                compute_batch_report(
                    black_box(&roster),
                    date("2025-01-01"),
                    date("2025-01-31"),
                    &rules,
                )
            })
        });
    }

    group.finish();
}

/// Benchmark: CSV rendering of a 100-employee batch.
fn bench_batch_csv(c: &mut Criterion) {
    let roster = create_roster(100);
    let report = compute_batch_report(
        &roster,
        date("2025-01-01"),
        date("2025-01-31"),
        &WorkRules::default(),
    )
    .unwrap();

    c.bench_function("batch_csv_100", |b| {
        b.iter(|| batch_csv_string(black_box(&report)))
    });
}

/// Benchmark: Severance and notice pay.
fn bench_termination(c: &mut Criterion) {
    let employee = create_employee(0, 0);
    let params = TerminationParams::new(
        Decimal::new(30000, 0),
        Decimal::new(2500, 0),
        Decimal::new(5434376, 2),
    );

    c.bench_function("termination", |b| {
        b.iter(|| compute_termination(black_box(&employee), date("2025-01-15"), &params))
    });
}

/// Benchmark: Period report through the HTTP router.
fn bench_period_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let body = serde_json::json!({
        "employee": {
            "id": "emp_bench_001",
            "full_name": "Ayşe Yılmaz",
            "hire_date": "2020-01-15",
            "base_salary": "30000",
            "time_logs": (1..=22).map(|day| serde_json::json!({
                "id": format!("log_{:03}", day),
                "date": format!("2025-01-{:02}", day),
                "check_in": "08:30",
                "check_out": "18:00"
            })).collect::<Vec<_>>()
        },
        "start_date": "2025-01-01",
        "end_date": "2025-01-31"
    })
    .to_string();

    c.bench_function("period_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/period")
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
    bench_period_report,
    bench_batch,
    bench_batch_csv,
    bench_termination,
    bench_period_endpoint,
);
criterion_main!(benches);

//! Criterion benchmarks for the analysis hot paths.
//!
//! Benchmarks:
//! 1. Weighted moving average (single rolling pass)
//! 2. Trend smoother (chained WMA construction)
//! 3. Full pipeline (smooth + detect + segments + events + aggregates)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hulltrend_core::analysis::run_analysis;
use hulltrend_core::config::AnalysisConfig;
use hulltrend_core::synthetic::synthetic_bars;
use hulltrend_core::trend::{weighted_moving_average, TrendSmoother};

fn bench_wma(c: &mut Criterion) {
    let closes: Vec<f64> = synthetic_bars(10_000, 3).iter().map(|b| b.close).collect();
    let mut group = c.benchmark_group("wma");
    for window in [5usize, 45, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &w| {
            b.iter(|| weighted_moving_average(black_box(&closes), w));
        });
    }
    group.finish();
}

fn bench_smoother(c: &mut Criterion) {
    let bars = synthetic_bars(10_000, 3);
    let smoother = TrendSmoother::new(45).unwrap();
    c.bench_function("trend_smoother_10k", |b| {
        b.iter(|| smoother.compute(black_box(&bars)));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let bars = synthetic_bars(10_000, 3);
    let config = AnalysisConfig::default();
    c.bench_function("full_pipeline_10k", |b| {
        b.iter(|| run_analysis(black_box(&bars), &config).unwrap());
    });
}

criterion_group!(benches, bench_wma, bench_smoother, bench_full_pipeline);
criterion_main!(benches);

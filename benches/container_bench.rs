//! Benchmark for the container combinators and the propagation bridge.
//!
//! Measures combinator chains against hand-written match baselines, and the
//! overhead of try_guard propagation relative to direct matching.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twofold::prelude::*;

// =============================================================================
// Combinator Chain Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    group.bench_function("map_filter_unwrap", |bencher| {
        bencher.iter(|| {
            let value = black_box(Present(21));
            value
                .map(|n: i32| n * 2)
                .filter(|n| n % 2 == 0)
                .unwrap_or(0)
        });
    });

    group.bench_function("match_baseline", |bencher| {
        bencher.iter(|| {
            let value = black_box(Present(21));
            match value {
                Present(n) if (n * 2) % 2 == 0 => n * 2,
                _ => 0,
            }
        });
    });

    group.finish();
}

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    group.bench_function("and_then_chain", |bencher| {
        bencher.iter(|| {
            let value: Outcome<i32, &str> = black_box(Success(8));
            value
                .and_then(|n| if n % 2 == 0 { Success(n / 2) } else { Failure("odd") })
                .and_then(|n| if n % 2 == 0 { Success(n / 2) } else { Failure("odd") })
                .unwrap_or(0)
        });
    });

    group.finish();
}

// =============================================================================
// Propagation Benchmarks
// =============================================================================

fn benchmark_propagation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("propagation");

    group.bench_function("try_guard", |bencher| {
        bencher.iter(|| {
            let result: Outcome<i32, &str> = try_guard(|| {
                let first = black_box(Success(20)).propagate()?;
                let second = black_box(Success(22)).propagate()?;
                Ok(first + second)
            });
            result.unwrap_or(0)
        });
    });

    group.bench_function("match_baseline", |bencher| {
        bencher.iter(|| {
            let first: Outcome<i32, &str> = black_box(Success(20));
            let second: Outcome<i32, &str> = black_box(Success(22));
            match (first, second) {
                (Success(a), Success(b)) => a + b,
                _ => 0,
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_outcome_chain,
    benchmark_propagation
);
criterion_main!(benches);

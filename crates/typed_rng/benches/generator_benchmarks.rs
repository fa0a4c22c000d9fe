//! Criterion benchmarks for typed_rng sampling.
//!
//! Compares per-call sampling, which builds a sampling law on every call,
//! against batch fills that build it once per buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use typed_rng::RandomGenerator;

/// Benchmark single-value sampling for each operation.
fn bench_single_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_draw");
    let mut rng = RandomGenerator::with_seed(42);

    group.bench_function("integer_full_range_i64", |b| {
        b.iter(|| black_box(rng.integer::<i64>()))
    });
    group.bench_function("integer_in_i32", |b| {
        b.iter(|| black_box(rng.integer_in(black_box(-10i32), black_box(10))))
    });
    group.bench_function("real_f64", |b| b.iter(|| black_box(rng.real::<f64>())));
    group.bench_function("boolean_with", |b| {
        b.iter(|| black_box(rng.boolean_with(black_box(0.75))))
    });

    let mut small = RandomGenerator::<SmallRng>::from_seed(42);
    group.bench_function("integer_in_i32_small_engine", |b| {
        b.iter(|| black_box(small.integer_in(black_box(-10i32), black_box(10))))
    });

    group.finish();
}

/// Benchmark batch fills across buffer sizes.
fn bench_batch_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_fill");
    let mut rng = RandomGenerator::with_seed(42);

    for size in [1_000, 10_000, 100_000] {
        let mut ints = vec![0i32; size];
        group.bench_with_input(BenchmarkId::new("fill_integer_in", size), &size, |b, _| {
            b.iter(|| rng.fill_integer_in(black_box(&mut ints), -10, 10))
        });

        let mut reals = vec![0.0f64; size];
        group.bench_with_input(BenchmarkId::new("fill_real_in", size), &size, |b, _| {
            b.iter(|| rng.fill_real_in(black_box(&mut reals), 0.0, 1.0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_draws, bench_batch_fill);
criterion_main!(benches);

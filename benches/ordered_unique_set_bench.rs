//! OrderedUniqueSet construction benchmark.
//!
//! Compares incremental `insert` of integers against `build_from` over a
//! point sequence, where many points tie on distance from the origin.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use seqlab::collection::{OrderedUniqueSet, Sequence};
use seqlab::geometry::{Point, RangePredicate};
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Interleaves values so that insertion is not in sorted order.
fn generate_shuffled_vec(size: i32) -> Vec<i32> {
    (0..size).map(|value| (value * 7919) % size).collect()
}

/// Generates points on a small grid; coordinates repeat every 64 elements.
fn generate_points(size: i32) -> Sequence<Point> {
    (0..size)
        .map(|value| Point::new(f64::from(value % 8), f64::from((value / 8) % 8)))
        .collect()
}

/// Returns the appropriate `BatchSize` based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_unique_set_insert");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        group.bench_with_input(BenchmarkId::new("insert", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| {
                    let mut set = OrderedUniqueSet::new();
                    for element in elements {
                        set.insert(element);
                    }
                    black_box(set)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_build_from(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_unique_set_build_from");
    let window = RangePredicate::new(1.0, 6.0, 1.0, 6.0);

    for size in SIZES {
        let points = generate_points(size);
        group.bench_with_input(BenchmarkId::new("build_from", size), &points, |bencher, points| {
            bencher.iter(|| {
                black_box(OrderedUniqueSet::build_from(
                    black_box(points),
                    window.as_fn::<Point>(),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_build_from);

criterion_main!(benches);

//! MathSet set-algebra benchmark.
//!
//! Compares the sorting engine (`Vec`, unsorted input sorted on every call)
//! with the order-preserving engine (`BTreeSet`, already ordered) for union,
//! intersection and difference.
//!
//! Operands are rebuilt in setup so every iteration starts from the same
//! unsorted `Vec` contents.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mathset::MathSet;
use std::collections::BTreeSet;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Generates `size` values in a scrambled but deterministic order.
fn generate_scrambled(size: i32, stride: i32) -> Vec<i32> {
    (0..size).map(|index| (index * stride) % (size * 2)).collect()
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("math_set_union");

    for size in SIZES {
        let left = generate_scrambled(size, 7);
        let right = generate_scrambled(size, 13);

        group.bench_with_input(BenchmarkId::new("vec_sorting", size), &size, |bencher, _| {
            bencher.iter_batched(
                || {
                    (
                        MathSet::<i32, Vec<i32>>::from_range(left.clone()),
                        MathSet::<i32, Vec<i32>>::from_range(right.clone()),
                    )
                },
                |(mut set_a, mut set_b)| black_box(set_a.union(&mut set_b)),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("btree_order_preserving", size),
            &size,
            |bencher, _| {
                bencher.iter_batched(
                    || {
                        (
                            MathSet::<i32, BTreeSet<i32>>::from_range(left.clone()),
                            MathSet::<i32, BTreeSet<i32>>::from_range(right.clone()),
                        )
                    },
                    |(mut set_a, mut set_b)| black_box(set_a.union(&mut set_b)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("math_set_intersection");

    for size in SIZES {
        let left = generate_scrambled(size, 7);
        let right = generate_scrambled(size, 13);

        group.bench_with_input(BenchmarkId::new("vec_sorting", size), &size, |bencher, _| {
            bencher.iter_batched(
                || {
                    (
                        MathSet::<i32, Vec<i32>>::from_range(left.clone()),
                        MathSet::<i32, Vec<i32>>::from_range(right.clone()),
                    )
                },
                |(mut set_a, mut set_b)| black_box(set_a.intersection(&mut set_b)),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("btree_order_preserving", size),
            &size,
            |bencher, _| {
                bencher.iter_batched(
                    || {
                        (
                            MathSet::<i32, BTreeSet<i32>>::from_range(left.clone()),
                            MathSet::<i32, BTreeSet<i32>>::from_range(right.clone()),
                        )
                    },
                    |(mut set_a, mut set_b)| black_box(set_a.intersection(&mut set_b)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("math_set_difference");

    for size in SIZES {
        let left = generate_scrambled(size, 7);
        let right = generate_scrambled(size, 13);

        group.bench_with_input(BenchmarkId::new("vec_sorting", size), &size, |bencher, _| {
            bencher.iter_batched(
                || {
                    (
                        MathSet::<i32, Vec<i32>>::from_range(left.clone()),
                        MathSet::<i32, Vec<i32>>::from_range(right.clone()),
                    )
                },
                |(mut set_a, mut set_b)| black_box(set_a.difference(&mut set_b)),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("btree_order_preserving", size),
            &size,
            |bencher, _| {
                bencher.iter_batched(
                    || {
                        (
                            MathSet::<i32, BTreeSet<i32>>::from_range(left.clone()),
                            MathSet::<i32, BTreeSet<i32>>::from_range(right.clone()),
                        )
                    },
                    |(mut set_a, mut set_b)| black_box(set_a.difference(&mut set_b)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("math_set_contain");

    for size in SIZES {
        let receiver: MathSet<i32, BTreeSet<i32>> = MathSet::from_range(0..size);
        let target: MathSet<i32, BTreeSet<i32>> = MathSet::from_range((0..size).step_by(3));

        group.bench_with_input(BenchmarkId::new("linear_scan", size), &size, |bencher, _| {
            bencher.iter(|| black_box(receiver.contain(black_box(&target))));
        });

        group.bench_with_input(BenchmarkId::new("ordered_sweep", size), &size, |bencher, _| {
            bencher.iter(|| black_box(receiver.contain_with_order(black_box(&target))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_union,
    benchmark_intersection,
    benchmark_difference,
    benchmark_contain
);
criterion_main!(benches);

//! Benchmark for Sequence vs standard Vec and VecDeque.
//!
//! Positional operations on a singly linked chain are O(n); these numbers
//! show how far that is from the contiguous containers.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use linkhash::collections::Sequence;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// append Benchmark
// =============================================================================

fn benchmark_append(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("append");

    for size in [100, 1000] {
        // Sequence append walks to the tail each time
        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence = Sequence::new();
                for index in 0..size {
                    sequence.append(black_box(index));
                }
                black_box(sequence)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// prepend Benchmark
// =============================================================================

fn benchmark_prepend(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prepend");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence = Sequence::new();
                for index in 0..size {
                    sequence.prepend(black_box(index));
                }
                black_box(sequence)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = VecDeque::new();
                for index in 0..size {
                    deque.push_front(black_box(index));
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get_at / find_first Benchmark
// =============================================================================

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup");

    for size in [100, 1000, 10000] {
        let sequence: Sequence<i32> = (0..size).collect();
        let middle = usize::try_from(size / 2).unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("Sequence_get_at", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.get_at(black_box(middle))));
        });

        group.bench_with_input(
            BenchmarkId::new("Sequence_find_first", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(sequence.find_first(black_box(&(size - 1)))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// insert_at / delete_at Benchmark
// =============================================================================

fn benchmark_insert_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_delete");

    for size in [100, 1000] {
        let middle = size / 2;

        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, &size| {
            let mut sequence: Sequence<usize> = (0..size).collect();
            bencher.iter(|| {
                sequence.insert_at(black_box(middle), black_box(0)).ok();
                black_box(sequence.delete_at(black_box(middle)))
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            let mut vector: Vec<usize> = (0..size).collect();
            bencher.iter(|| {
                vector.insert(black_box(middle), black_box(0));
                black_box(vector.remove(black_box(middle)))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Drop Benchmark
// =============================================================================

fn benchmark_drop(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("drop");

    for size in [1000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (0..size).collect::<Sequence<u64>>(),
                drop,
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_append,
    benchmark_prepend,
    benchmark_lookup,
    benchmark_insert_delete,
    benchmark_drop
);

criterion_main!(benches);

//! Benchmark for BucketedMap vs standard HashMap.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use linkhash::collections::{BucketedMap, ResizePolicy};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        // Starts from one bucket and rehashes on the way up
        group.bench_with_input(BenchmarkId::new("BucketedMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BucketedMap::new();
                for key in 0..size {
                    map.put(black_box(key), key);
                }
                black_box(map)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BucketedMap_presized", size),
            &size,
            |bencher, &size| {
                let policy = ResizePolicy::new().with_initial_buckets(size * 2);
                bencher.iter(|| {
                    let mut map = BucketedMap::with_policy(policy);
                    for key in 0..size {
                        map.put(black_box(key), key);
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for key in 0..size {
                    map.insert(black_box(key), key);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let bucketed: BucketedMap<usize, usize> = (0..size).map(|key| (key, key)).collect();
        let standard: HashMap<usize, usize> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("BucketedMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(bucketed.get(black_box(&key)).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(standard.get(black_box(&key)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// maybe_resize Benchmark
// =============================================================================

fn benchmark_rehash(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("rehash");

    for size in [1000, 10000] {
        // Filled to just past the grow threshold with shrinking disabled
        let policy = ResizePolicy::new()
            .with_initial_buckets(size)
            .with_shrink_below(0.0);
        group.bench_with_input(BenchmarkId::new("BucketedMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || {
                    let mut map = BucketedMap::with_policy(policy);
                    for key in 0..=size * 7 / 10 {
                        map.put(key, key);
                    }
                    map
                },
                |mut map| black_box(map.maybe_resize()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_put, benchmark_get, benchmark_rehash);

criterion_main!(benches);

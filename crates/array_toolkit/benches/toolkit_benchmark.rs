//! Benchmark for sort, search and hashing.
//!
//! Run with: cargo bench --package array_toolkit --bench toolkit_benchmark

#![allow(missing_docs)]

use array_toolkit::{hash_code, search, search_binary, sort, to_string};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_input(len: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    (0..len).map(|_| rng.gen()).collect()
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_pivot_sort");

    for len in [1_000usize, 10_000, 100_000] {
        let input = random_input(len);
        group.bench_with_input(BenchmarkId::new("random", len), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                sort(black_box(&mut data));
                data
            });
        });
    }

    let ascending: Vec<i32> = (0..10_000).collect();
    group.bench_function("presorted_10000", |b| {
        b.iter(|| {
            let mut data = ascending.clone();
            sort(black_box(&mut data));
            data
        });
    });

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut sorted = random_input(100_000);
    sort(&mut sorted);
    let target = sorted[sorted.len() / 3];

    c.bench_function("search_binary_100000", |b| {
        b.iter(|| black_box(search_binary(black_box(&sorted), black_box(target))));
    });

    c.bench_function("search_all_100000", |b| {
        b.iter(|| black_box(search(black_box(&sorted), black_box(target))));
    });
}

fn benchmark_hash_and_text(c: &mut Criterion) {
    let input = random_input(10_000);

    c.bench_function("hash_code_10000", |b| {
        b.iter(|| black_box(hash_code(black_box(&input))));
    });

    c.bench_function("to_string_10000", |b| {
        b.iter(|| black_box(to_string(black_box(&input))));
    });
}

criterion_group!(
    benches,
    benchmark_sort,
    benchmark_search,
    benchmark_hash_and_text
);
criterion_main!(benches);

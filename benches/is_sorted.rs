//! Early-exit scan against the sort-and-compare baseline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sortcheck::Order;
use std::hint::black_box;

const LEN: usize = 1_000_000;

/// Ascending `0..LEN` with a single zero at `at`.
fn input(at: Option<usize>) -> Vec<u32> {
    let mut v: Vec<u32> = (0..LEN as u32).collect();
    if let Some(at) = at {
        v[at] = 0;
    }
    v
}

fn scan_vs_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_sorted");
    group.sample_size(10);

    for (name, at) in [("sorted", None), ("midpoint", Some(LEN / 2)), ("early", Some(16))] {
        let v = input(at);

        group.bench_with_input(BenchmarkId::new("scan", name), &v, |b, v| {
            b.iter(|| sortcheck::is_sorted_by_mode(black_box(v), Order::NonDecreasing))
        });
        group.bench_with_input(BenchmarkId::new("full_sort", name), &v, |b, v| {
            b.iter(|| sortcheck::compare_via_full_sort(black_box(v), false))
        });
    }

    group.finish();
}

fn by_key(c: &mut Criterion) {
    let records: Vec<(u32, u64)> = (0..LEN as u32).map(|i| (i, u64::from(i) * 3)).collect();

    c.bench_function("is_sorted_by_key/sorted", |b| {
        b.iter(|| sortcheck::is_sorted_by_key(black_box(&records), |r| r.1, true))
    });
}

criterion_group!(benches, scan_vs_sort, by_key);
criterion_main!(benches);

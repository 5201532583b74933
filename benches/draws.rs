use randomizer::rng::{fast, secure};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_words(c: &mut Criterion) {
    c.bench_function("fast u64_n", |b| b.iter(|| fast::u64_n(black_box(1000))));
    c.bench_function("secure u64_n", |b| {
        b.iter(|| secure::u64_n(black_box(1000)))
    });
    c.bench_function("fast float64", |b| b.iter(fast::float64));
    c.bench_function("secure float64", |b| b.iter(secure::float64));
}

pub fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in [8usize, 64, 512, 4096] {
        let mut buf = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("fast", size), &size, |b, _| {
            b.iter(|| fast::fill(black_box(&mut buf)))
        });
        group.bench_with_input(BenchmarkId::new("secure", size), &size, |b, _| {
            b.iter(|| secure::fill(black_box(&mut buf)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_words, bench_fill);
criterion_main!(benches);

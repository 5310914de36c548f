//! Benchmark suite for the core mixer and sequence builders.
//!
//! Covers the two cost centers:
//! 1. Raw mixing: `raw_value` and chained advancement
//! 2. Derived structures: arrays, shuffles, strings
//!
//! All benchmarks use deterministic inputs from a fixed seed.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use seedmix::Generator;

fn bench_raw_value(c: &mut Criterion) {
    c.bench_function("raw_value", |b| {
        b.iter(|| black_box(Generator::new(black_box(98765)).raw_value()));
    });

    c.bench_function("raw_stream_1024", |b| {
        b.iter(|| {
            let sum: u64 = Generator::new(black_box(98765))
                .stream()
                .take(1024)
                .map(u64::from)
                .sum();
            black_box(sum)
        });
    });
}

fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");
    group.throughput(Throughput::Elements(1024));

    group.bench_function("int_array_1024", |b| {
        b.iter(|| {
            black_box(
                Generator::new(black_box(98765))
                    .int_array(1024, 0, 1_000_000)
                    .unwrap(),
            )
        });
    });

    group.bench_function("shuffle_1024", |b| {
        let items: Vec<u32> = (0..1024).collect();
        b.iter_batched(
            || items.clone(),
            |mut items| {
                Generator::new(black_box(42)).shuffle(&mut items);
                black_box(items)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("shuffle_no_repetition_1024", |b| {
        let items: Vec<u32> = (0..1024).collect();
        b.iter_batched(
            || items.clone(),
            |mut items| {
                Generator::new(black_box(42)).shuffle_no_repetition(&mut items);
                black_box(items)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("string_1024", |b| {
        b.iter(|| {
            black_box(
                Generator::new(black_box(98765))
                    .string_of_length(1024, 'a', 'z')
                    .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_raw_value, bench_sequences);
criterion_main!(benches);

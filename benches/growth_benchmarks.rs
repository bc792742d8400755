//! Benchmarks for array growth and string assembly.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dynbuf::{ByteString, DynArray};

/// Benchmark push-driven growth from an empty array
fn bench_array_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_push");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArray::new();
                for i in 0..size {
                    arr.push(black_box(i as u64));
                }
                black_box(arr.len())
            });
        });
    }

    group.finish();
}

/// Benchmark pushes into a pre-reserved buffer (no reallocation on the way)
fn bench_array_reserved_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_reserved_push");

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArray::new();
                arr.reserve(size);
                for i in 0..size {
                    arr.push(black_box(i as u64));
                }
                black_box(arr.len())
            });
        });
    }

    group.finish();
}

/// Benchmark string construction from a raw byte slice
fn bench_string_from_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_from_bytes");

    for size in [16, 1_000, 100_000].iter() {
        let bytes = vec![b'x'; *size];
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(ByteString::from_bytes(black_box(&bytes))));
        });
    }

    group.finish();
}

/// Benchmark concatenation of two equally sized strings
fn bench_string_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_concat");

    for size in [16, 1_000, 100_000].iter() {
        let a = ByteString::from_bytes(&vec![b'a'; *size]);
        let b_half = ByteString::from_bytes(&vec![b'b'; *size]);
        group.throughput(Throughput::Bytes(*size as u64 * 2));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(a.concat(black_box(&b_half))));
        });
    }

    group.finish();
}

criterion_group!(
    growth_benches,
    bench_array_push,
    bench_array_reserved_push,
    bench_string_from_bytes,
    bench_string_concat,
);

criterion_main!(growth_benches);

//! Criterion benchmarks for sequence generation and summaries.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibstudio_core::{generate, rows, summarize};

fn bench_generate(c: &mut Criterion) {
    let counts: Vec<i64> = vec![15, 94, 250, 500];

    let mut group = c.benchmark_group("generate");
    for &count in &counts {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| generate(count));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("summarize");
    for &count in &counts {
        let sequence = generate(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &sequence, |b, seq| {
            b.iter(|| summarize(seq));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("rows");
    for &count in &counts {
        let sequence = generate(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &sequence, |b, seq| {
            b.iter(|| rows(seq));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);

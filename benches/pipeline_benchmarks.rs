//! Benchmarks for the highlighting pipeline.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use micropad_highlight::{flatten, HighlightEngine, StyleTable, Theme};
use micropad_syntax::tokenize;

/// Generates a plausible Python source for benchmarking.
fn generate_python_source(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("def compute_{i}(x):\n    # doubles and labels\n    return x * 2, \"row {i}\"\n"))
        .collect()
}

/// Benchmarks tokenization of the full document.
fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [100, 1000, 10000].iter() {
        let text = generate_python_source(*size);

        group.bench_with_input(BenchmarkId::new("python", size), &text, |b, text| {
            b.iter(|| tokenize(black_box(text), "python").unwrap())
        });
    }

    group.finish();
}

/// Benchmarks flattening a pre-tokenized stream.
fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    let table = StyleTable::build(&Theme::dark());
    for size in [100, 1000, 10000].iter() {
        let text = generate_python_source(*size);
        let tokens = tokenize(&text, "python").unwrap();

        group.bench_with_input(BenchmarkId::new("python", size), &tokens, |b, tokens| {
            b.iter(|| flatten(black_box(tokens), &table))
        });
    }

    group.finish();
}

/// Benchmarks the full per-block pass (snapshot normalization, lex, flatten).
fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pass");

    let engine = HighlightEngine::new("python", Theme::dark()).unwrap();
    for size in [100, 1000].iter() {
        let text = generate_python_source(*size);

        group.bench_with_input(BenchmarkId::new("flat_styles", size), &text, |b, text| {
            b.iter(|| engine.flat_styles(black_box(text)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_flatten, bench_full_pass);
criterion_main!(benches);

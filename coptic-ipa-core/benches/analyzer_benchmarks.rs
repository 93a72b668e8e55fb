//! Performance benchmarks for the analyzer
//!
//! Run with: cargo bench --bench analyzer_benchmarks

use coptic_ipa_core::{AnalyzeOptions, Analyzer, Dialect};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const VERSE: &str = "Ⲡⲓⲭⲣⲓⲥⲧⲟⲥ ⲁϥⲧⲱⲛϥ ⲉ̀ⲃⲟⲗ ϧⲉⲛ ⲛⲏⲉⲑⲙⲱⲟⲩⲧ, ⲫⲏⲉⲧⲁϥⲙⲟⲩ ⲁϥϩⲱⲙⲓ ⲉ̀ϫⲉⲛ ⲫ̀ⲙⲟⲩ. ";

/// Generate text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let repeat_count = size / VERSE.len() + 1;
    VERSE.repeat(repeat_count)
}

fn bench_dialects(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialects");
    let text = generate_text(10_240);

    for dialect in [Dialect::GrecoBohairic, Dialect::OldBohairic] {
        let analyzer = Analyzer::new(dialect).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("analyze", dialect.code()), &text, |b, text| {
            b.iter(|| analyzer.analyze(black_box(text)));
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");
    let text = generate_text(10_240);
    let analyzer = Analyzer::new(Dialect::GrecoBohairic).unwrap();

    for use_cache in [true, false] {
        let options = AnalyzeOptions {
            use_cache,
            ..AnalyzeOptions::default()
        };
        group.bench_with_input(BenchmarkId::new("use_cache", use_cache), &text, |b, text| {
            b.iter(|| analyzer.analyze_with(black_box(text), options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dialects, bench_cache);
criterion_main!(benches);

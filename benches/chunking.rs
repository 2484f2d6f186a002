//! Benchmarks for recursive chunking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strata::{Chunker, ChunkerConfig, LengthFunction, RecursiveChunker};

fn sample_text(size: usize) -> String {
    // Realistic text with sentence and paragraph structure
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump!\n",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow.\n\n",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_prose(c: &mut Criterion) {
    let mut group = c.benchmark_group("recursive_prose");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = RecursiveChunker::prose(500, 50).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("chars", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)));
        });
    }

    group.finish();
}

fn bench_character_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("character_fallback");

    // No structural separators: every chunk is packed one char at a time
    for size in [1_000, 10_000] {
        let text = "x".repeat(size);
        let chunker = RecursiveChunker::prose(500, 50).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("atomic", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)));
        });
    }

    group.finish();
}

fn bench_length_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_function");
    let text = sample_text(10_000);

    for (name, length) in [
        ("bytes", LengthFunction::bytes()),
        ("chars", LengthFunction::chars()),
        ("graphemes", LengthFunction::graphemes()),
        ("words", LengthFunction::words()),
    ] {
        let config = ChunkerConfig::builder(100, 10)
            .length_function(length)
            .build()
            .unwrap();
        let chunker = RecursiveChunker::new(config);

        group.bench_with_input(BenchmarkId::new(name, text.len()), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_prose,
    bench_character_fallback,
    bench_length_functions
);
criterion_main!(benches);

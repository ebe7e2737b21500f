//! Benchmarks for the text transforms.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use sterile::{
    decode_entities, encode_entities, smart_format, smart_format_tags, sluggerize, sterilize,
    strip_tags, titlecase, transliterate,
};

const SAMPLE_HTML: &str = include_str!("../tests/fixtures/sample.html");

const PROSE: &str = "\"It's simple,\" said the chef -- 'cream, sugar, eggs... that's all.' \
    Ça coûte 12€ à Zürich, Ελληνικά, Русский, 日本語. ";

fn prose(repeat: usize) -> String {
    PROSE.repeat(repeat)
}

// ============================================================================
// Character-level transforms
// ============================================================================

fn bench_transliterate(c: &mut Criterion) {
    let text = prose(64);
    let mut group = c.benchmark_group("transliterate");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("mixed_scripts", |b| b.iter(|| transliterate(black_box(&text))));
    let ascii = "plain ascii text stays on the fast path ".repeat(64);
    group.bench_function("ascii", |b| b.iter(|| transliterate(black_box(&ascii))));
    group.finish();
}

fn bench_entities(c: &mut Criterion) {
    let text = prose(64);
    let encoded = encode_entities(&text);
    let mut group = c.benchmark_group("entities");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("encode", |b| b.iter(|| encode_entities(black_box(&text))));
    group.bench_function("decode", |b| b.iter(|| decode_entities(black_box(&encoded))));
    group.finish();
}

// ============================================================================
// Markup-aware transforms
// ============================================================================

fn bench_markup(c: &mut Criterion) {
    let html = SAMPLE_HTML.repeat(16);
    let mut group = c.benchmark_group("markup");
    group.throughput(Throughput::Bytes(html.len() as u64));
    group.bench_function("strip_tags", |b| b.iter(|| strip_tags(black_box(&html))));
    group.bench_function("smart_format_tags", |b| {
        b.iter(|| smart_format_tags(black_box(&html)))
    });
    group.bench_function("sterilize", |b| b.iter(|| sterilize(black_box(&html))));
    group.finish();
}

// ============================================================================
// Word-level transforms
// ============================================================================

fn bench_words(c: &mut Criterion) {
    let text = prose(16);
    c.bench_function("smart_format", |b| b.iter(|| smart_format(black_box(&text))));
    c.bench_function("titlecase", |b| {
        b.iter(|| titlecase(black_box("the quick brown fox jumps over the lazy dog: a tale")))
    });
    c.bench_function("sluggerize", |b| {
        b.iter(|| sluggerize(black_box("Crème Brûlée -- A History of the Dessert!")))
    });
}

criterion_group!(benches, bench_transliterate, bench_entities, bench_markup, bench_words);
criterion_main!(benches);

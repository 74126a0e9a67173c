//! Criterion microbenches for figedit codecs.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - JSON decoding and encoding
//! - XML decoding and encoding
//! - Text decoding

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use figedit::codec::{Codec, JsonCodec, TextCodec, XmlCodec};

// Include test fixtures at compile time (no file I/O during benchmark)
const JSON_FIXTURE: &str = include_str!("../tests/fixtures/figures.json");
const XML_FIXTURE: &str = include_str!("../tests/fixtures/figures.xml");

fn sample_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Figure{}: {}: {}", i, i * 3, i * 7))
        .collect()
}

/// Benchmark JSON decoding and encoding.
fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");
    group.throughput(Throughput::Bytes(JSON_FIXTURE.len() as u64));

    group.bench_function("decode", |b| {
        b.iter(|| {
            let lines = JsonCodec.decode(black_box(JSON_FIXTURE.as_bytes())).unwrap();
            black_box(lines)
        })
    });

    let lines = sample_lines(500);
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            let bytes = JsonCodec.encode(black_box(&lines)).unwrap();
            black_box(bytes)
        })
    });

    group.finish();
}

/// Benchmark XML decoding and encoding.
fn bench_xml(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml");
    group.throughput(Throughput::Bytes(XML_FIXTURE.len() as u64));

    group.bench_function("decode", |b| {
        b.iter(|| {
            let lines = XmlCodec.decode(black_box(XML_FIXTURE.as_bytes())).unwrap();
            black_box(lines)
        })
    });

    let lines = sample_lines(500);
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            let bytes = XmlCodec.encode(black_box(&lines)).unwrap();
            black_box(bytes)
        })
    });

    group.finish();
}

/// Benchmark text decoding (for comparison).
fn bench_text(c: &mut Criterion) {
    let text = TextCodec.encode(&sample_lines(500)).unwrap();
    let mut group = c.benchmark_group("text");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("decode", |b| {
        b.iter(|| {
            let lines = TextCodec.decode(black_box(&text)).unwrap();
            black_box(lines)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_json, bench_xml, bench_text);
criterion_main!(benches);

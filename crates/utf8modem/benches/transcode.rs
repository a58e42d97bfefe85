//! Benchmark – `utf8modem::decode` / `utf8modem::encode`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utf8modem::{ErrorMode, decode, encode};

/// Produce a deterministic text of at least `target_len` bytes that mixes one-,
/// two-, three- and four-byte sequences.
fn make_text(target_len: usize) -> String {
    const SAMPLE: &str = "ascii é € 😀 ";
    let mut s = String::with_capacity(target_len + SAMPLE.len());
    while s.len() < target_len {
        s.push_str(SAMPLE);
    }
    s
}

/// Flip every 64th byte to 0xFF so replacement mode has work to do.
fn corrupt(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| if i % 64 == 63 { 0xFF } else { b })
        .collect()
}

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode");
    group.measurement_time(Duration::from_secs(5));

    for &size in &[1_024usize, 64 * 1_024] {
        let text = make_text(size);
        let bytes = text.as_bytes();
        let corrupted = corrupt(bytes);
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode_fatal", size), bytes, |b, bytes| {
            b.iter(|| decode(black_box(bytes), ErrorMode::Fatal));
        });
        group.bench_with_input(
            BenchmarkId::new("decode_replacement_corrupted", size),
            &corrupted,
            |b, bytes| b.iter(|| decode(black_box(bytes), ErrorMode::Replacement)),
        );
        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| encode(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transcode);
criterion_main!(benches);

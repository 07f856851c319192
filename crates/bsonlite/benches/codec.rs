// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_precision_loss)] // Benchmark inputs

use bsonlite::{
    decode_int64_as_number, encode_i64, encode_int64_bits, pack_cstring, pack_int32,
    pack_string, string_to_utf8_bytes, utf8_byte_length, utf8_bytes_to_string, NumericSubtype,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIXED_TEXT: &str = "sensor/temperature/Köln/東京/°C reading\r\nnext line";

// ============================================================================
// Byte packing
// ============================================================================

/// Benchmark: int32 + cstring element header
/// Target: < 50 ns
fn bench_pack_element_header(c: &mut Criterion) {
    let mut buf = [0u8; 128];
    c.bench_function("pack_element_header", |b| {
        b.iter(|| {
            let mut offset = 0;
            offset += pack_int32(black_box(42), &mut buf, offset).unwrap();
            offset += pack_cstring(black_box("field_name"), &mut buf, offset).unwrap();
            black_box(offset)
        })
    });
}

fn bench_pack_string(c: &mut Criterion) {
    let mut buf = [0u8; 256];
    c.bench_function("pack_string_mixed", |b| {
        b.iter(|| pack_string(black_box(MIXED_TEXT), &mut buf, 0).unwrap())
    });
}

// ============================================================================
// 64-bit numeric codec
// ============================================================================

/// Benchmark: emulated half split vs native bit cast
fn bench_int64_paths(c: &mut Criterion) {
    let value = 1_700_000_000_000i64;
    c.bench_function("int64_encode_emulated", |b| {
        b.iter(|| encode_int64_bits(black_box(value as f64), NumericSubtype::Int64))
    });
    c.bench_function("int64_encode_native", |b| {
        b.iter(|| encode_i64(black_box(value)))
    });

    let bytes = encode_i64(value);
    c.bench_function("int64_decode_as_number", |b| {
        b.iter(|| decode_int64_as_number(black_box(&bytes), 0).unwrap())
    });
}

// ============================================================================
// UTF-8 transcoder
// ============================================================================

fn bench_utf8(c: &mut Criterion) {
    c.bench_function("utf8_encode_mixed", |b| {
        b.iter(|| string_to_utf8_bytes(black_box(MIXED_TEXT)).unwrap())
    });
    c.bench_function("utf8_length_mixed", |b| {
        b.iter(|| utf8_byte_length(black_box(MIXED_TEXT)).unwrap())
    });

    let encoded = string_to_utf8_bytes(MIXED_TEXT).unwrap();
    c.bench_function("utf8_decode_mixed", |b| {
        b.iter(|| utf8_bytes_to_string(black_box(&encoded)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_pack_element_header,
    bench_pack_string,
    bench_int64_paths,
    bench_utf8
);
criterion_main!(benches);

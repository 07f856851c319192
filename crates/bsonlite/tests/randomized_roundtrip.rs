// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_precision_loss)] // Integer/double comparisons
#![allow(clippy::float_cmp)] // Exact round-trip assertions

//! Seeded randomized round-trips across the codec.

use bsonlite::{
    decode_i64, decode_int64_as_number, encode_i64, encode_int64_bits, pack_string,
    string_len, string_to_utf8_bytes_with, unpack_string, utf8_byte_length_with,
    utf8_bytes_to_string_with, CodecConfig, NumericSubtype, Utf8Mode, MAX_SAFE_INTEGER,
};

const ITERATIONS: usize = 2_000;

/// Characters drawn from each UTF-8 width class, plus line breaks.
const ALPHABET: &[char] = &[
    'a', 'Z', '0', ' ', '\n', '\r', '\u{7F}', 'é', 'ß', 'Ω', '\u{7FF}', '中', '文', '€', '\u{FFFD}',
    '😀', '\u{10FFFF}',
];

fn random_string(rng: &mut fastrand::Rng, max_len: usize, bmp_only: bool) -> String {
    let len = rng.usize(..=max_len);
    (0..len)
        .map(|_| loop {
            let c = ALPHABET[rng.usize(..ALPHABET.len())];
            if !bmp_only || u32::from(c) <= 0xFFFF {
                break c;
            }
        })
        .collect()
}

#[test]
fn test_random_safe_integers_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0001);
    for _ in 0..ITERATIONS {
        let v = rng.i64(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER);
        let emulated = encode_int64_bits(v as f64, NumericSubtype::Int64);
        assert_eq!(emulated, encode_i64(v), "value {}", v);
        assert_eq!(decode_int64_as_number(&emulated, 0).unwrap(), v as f64);
        assert_eq!(decode_i64(&emulated, 0).unwrap(), v);
    }
}

#[test]
fn test_random_doubles_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0002);
    for _ in 0..ITERATIONS {
        let v = f64::from_bits(rng.u64(..));
        if v.is_nan() {
            continue;
        }
        let bytes = encode_int64_bits(v, NumericSubtype::Double);
        assert_eq!(f64::from_le_bytes(bytes), v);
    }
}

#[test]
fn test_random_strings_roundtrip_both_modes() {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0003);
    for mode in [Utf8Mode::Full, Utf8Mode::Bmp] {
        let config = CodecConfig::default().utf8_mode(mode);
        for _ in 0..ITERATIONS {
            let s = random_string(&mut rng, 24, mode == Utf8Mode::Bmp);
            let bytes = string_to_utf8_bytes_with(&s, &config).unwrap();
            assert_eq!(utf8_byte_length_with(&s, &config).unwrap(), bytes.len());

            let normalized = s.replace("\r\n", "\n");
            assert_eq!(bytes, normalized.as_bytes());
            assert_eq!(utf8_bytes_to_string_with(&bytes, &config).unwrap(), normalized);
        }
    }
}

#[test]
fn test_random_string_fields_at_random_offsets() {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0004);
    for _ in 0..ITERATIONS {
        let s = random_string(&mut rng, 16, false);
        let offset = rng.usize(..8);
        let mut buf = vec![0u8; offset + string_len(&s).unwrap()];

        let written = pack_string(&s, &mut buf, offset).unwrap();
        assert_eq!(offset + written, buf.len());

        let (decoded, consumed) = unpack_string(&buf, offset).unwrap();
        assert_eq!(consumed, written);
        assert_eq!(decoded, s.replace("\r\n", "\n"));
    }
}

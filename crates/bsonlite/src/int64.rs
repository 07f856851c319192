// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 64-bit numeric codec.
//!
//! Two encodings share the same 8-byte little-endian slot:
//!
//! - `Int64`: exact two's-complement integer, written as the low 32-bit half
//!   followed by the high half.
//! - `Double`: the IEEE-754 bit pattern.
//!
//! The bytes alone do not say which one was used; the caller carries a
//! [`NumericSubtype`] per field and picks the matching decoder.
//!
//! [`split_int64_halves`] performs the integer split with `f64` arithmetic
//! and 32-bit operations only. It is kept beside the native `i64` path so
//! tests can pin both to the same bytes.

use crate::error::CodecResult;
use crate::pack::cursor::Cursor;

/// 2^32 as a double.
const TWO_PWR_32: f64 = 4_294_967_296.0;

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Smallest integer a double represents exactly.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Wire sub-type of an 8-byte numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSubtype {
    /// Two's-complement 64-bit integer.
    Int64,
    /// IEEE-754 double precision.
    Double,
}

/// Split an integral double into `(low, high)` 32-bit halves of its 64-bit
/// two's-complement form, using `value = high * 2^32 + low`.
///
/// Negative values are split by magnitude, then negated pairwise (invert
/// both halves, add one to `low`, carry into `high`). Fractional parts are
/// truncated toward zero. Results are exact for `|value| <= 2^53`.
pub fn split_int64_halves(value: f64) -> (u32, u32) {
    let magnitude = value.abs();
    let mut low = to_uint32(magnitude % TWO_PWR_32);
    let mut high = to_uint32(magnitude / TWO_PWR_32);

    if value < 0.0 {
        low = !low;
        high = !high;
        low = low.wrapping_add(1);
        if low == 0 {
            high = high.wrapping_add(1);
        }
    }

    (low, high)
}

/// Truncate toward zero and wrap into 32 bits.
fn to_uint32(x: f64) -> u32 {
    let t = x.trunc();
    if !t.is_finite() {
        return 0;
    }
    t.rem_euclid(TWO_PWR_32) as u32
}

/// Encode `value` into 8 little-endian bytes under the declared sub-type.
///
/// `Int64` requires an integral value within the exact-integer range;
/// anything else is truncated and wrapped, never rejected.
pub fn encode_int64_bits(value: f64, subtype: NumericSubtype) -> [u8; 8] {
    match subtype {
        NumericSubtype::Int64 => {
            let (low, high) = split_int64_halves(value);
            let mut buf = [0u8; 8];
            buf[..4].copy_from_slice(&low.to_le_bytes());
            buf[4..].copy_from_slice(&high.to_le_bytes());
            buf
        }
        NumericSubtype::Double => value.to_le_bytes(),
    }
}

/// Native integer path: same bytes as `encode_int64_bits(v as f64, Int64)`
/// for every `v` in the exact-integer range.
pub fn encode_i64(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Read an `Int64` field as a double: `high * 2^32 + unsigned(low)`.
///
/// Exact while the stored value lies within the exact-integer range. Must
/// not be used on `Double` fields; see [`decode_double`].
pub fn decode_int64_as_number(buffer: &[u8], offset: usize) -> CodecResult<f64> {
    let mut cursor = Cursor::at(buffer, offset);
    let low = cursor.read_i32_le()?;
    let high = cursor.read_i32_le()?;

    let low = if low >= 0 {
        f64::from(low)
    } else {
        TWO_PWR_32 + f64::from(low)
    };
    Ok(f64::from(high) * TWO_PWR_32 + low)
}

/// Read an `Int64` field without loss.
pub fn decode_i64(buffer: &[u8], offset: usize) -> CodecResult<i64> {
    Cursor::at(buffer, offset).read_i64_le()
}

/// Read a `Double` field.
pub fn decode_double(buffer: &[u8], offset: usize) -> CodecResult<f64> {
    Cursor::at(buffer, offset).read_f64_le()
}

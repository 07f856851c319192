// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte packing primitives.
//!
//! Every function takes the caller's buffer and a start offset and returns
//! the number of bytes written or consumed; cursor bookkeeping stays with
//! the caller. A field that does not fit fails with `OutOfBounds` before any
//! byte is written.
//!
//! ```text
//! cstring  : bytes... 0x00
//! string   : int32 len (bytes + 1) | bytes... | 0x00
//! int32    : 4 bytes LE
//! int64    : 8 bytes LE (two's complement)
//! double   : 8 bytes LE (IEEE-754)
//! ```
//!
//! Interior zero bytes in a cstring are not escaped; such a name cannot be
//! read back in one piece.

pub mod cursor;

pub use cursor::{Cursor, CursorMut};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::int64::encode_i64;
use crate::utf8::{string_to_utf8_bytes_with, utf8_byte_length_with, utf8_bytes_to_string_with};

/// Write `name` as a zero-terminated UTF-8 string. Returns `len + 1`.
pub fn pack_cstring(name: &str, buffer: &mut [u8], offset: usize) -> CodecResult<usize> {
    pack_cstring_with(name, &CodecConfig::default(), buffer, offset)
}

pub fn pack_cstring_with(
    name: &str,
    config: &CodecConfig,
    buffer: &mut [u8],
    offset: usize,
) -> CodecResult<usize> {
    let bytes = string_to_utf8_bytes_with(name, config)?;
    let mut cursor = CursorMut::at(buffer, offset);
    cursor.ensure(bytes.len() + 1)?;
    cursor.write_bytes(&bytes)?;
    cursor.write_u8(0)?;
    Ok(cursor.consumed())
}

/// Read a zero-terminated UTF-8 string. Consumed count includes the
/// terminator.
pub fn unpack_cstring(buffer: &[u8], offset: usize) -> CodecResult<(String, usize)> {
    unpack_cstring_with(buffer, offset, &CodecConfig::default())
}

pub fn unpack_cstring_with(
    buffer: &[u8],
    offset: usize,
    config: &CodecConfig,
) -> CodecResult<(String, usize)> {
    let mut cursor = Cursor::at(buffer, offset);
    let raw = cursor.read_until_nul()?;
    let value = utf8_bytes_to_string_with(raw, config).map_err(|e| shift_utf8_offset(e, offset))?;
    Ok((value, cursor.consumed()))
}

/// Write the low 32 bits of `value`, least-significant byte first.
///
/// Wider or negative inputs wrap per two's complement. Always returns 4.
pub fn pack_int32(value: i64, buffer: &mut [u8], offset: usize) -> CodecResult<usize> {
    let mut cursor = CursorMut::at(buffer, offset);
    cursor.write_u32_le(value as u32)?;
    Ok(4)
}

pub fn unpack_int32(buffer: &[u8], offset: usize) -> CodecResult<i32> {
    Cursor::at(buffer, offset).read_i32_le()
}

/// Write an `Int64` field. Always returns 8.
pub fn pack_int64(value: i64, buffer: &mut [u8], offset: usize) -> CodecResult<usize> {
    CursorMut::at(buffer, offset).write_bytes(&encode_i64(value))?;
    Ok(8)
}

/// Write a `Double` field. Always returns 8.
pub fn pack_double(value: f64, buffer: &mut [u8], offset: usize) -> CodecResult<usize> {
    CursorMut::at(buffer, offset).write_f64_le(value)?;
    Ok(8)
}

/// Write a length-prefixed string: int32 (UTF-8 length + 1), bytes, zero.
pub fn pack_string(value: &str, buffer: &mut [u8], offset: usize) -> CodecResult<usize> {
    pack_string_with(value, &CodecConfig::default(), buffer, offset)
}

pub fn pack_string_with(
    value: &str,
    config: &CodecConfig,
    buffer: &mut [u8],
    offset: usize,
) -> CodecResult<usize> {
    let bytes = string_to_utf8_bytes_with(value, config)?;
    let prefix = i32::try_from(bytes.len() + 1).map_err(|_| CodecError::InvalidLength {
        expected: i32::MAX as usize,
        actual: bytes.len() + 1,
    })?;

    let mut cursor = CursorMut::at(buffer, offset);
    cursor.ensure(4 + bytes.len() + 1)?;
    cursor.write_i32_le(prefix)?;
    cursor.write_bytes(&bytes)?;
    cursor.write_u8(0)?;
    Ok(cursor.consumed())
}

/// Read a length-prefixed string. Consumed count covers prefix, bytes and
/// terminator.
pub fn unpack_string(buffer: &[u8], offset: usize) -> CodecResult<(String, usize)> {
    unpack_string_with(buffer, offset, &CodecConfig::default())
}

pub fn unpack_string_with(
    buffer: &[u8],
    offset: usize,
    config: &CodecConfig,
) -> CodecResult<(String, usize)> {
    let mut cursor = Cursor::at(buffer, offset);
    let prefix = cursor.read_i32_le()?;
    let total = usize::try_from(prefix)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(CodecError::InvalidLength {
            expected: 1,
            actual: prefix.max(0) as usize,
        })?;

    let body_offset = cursor.offset();
    let raw = cursor.read_bytes(total - 1)?;
    let terminator_offset = cursor.offset();
    if cursor.read_u8()? != 0 {
        return Err(CodecError::MissingTerminator {
            offset: terminator_offset,
        });
    }

    let value =
        utf8_bytes_to_string_with(raw, config).map_err(|e| shift_utf8_offset(e, body_offset))?;
    Ok((value, cursor.consumed()))
}

/// Bytes `pack_cstring` will write for `name`.
pub fn cstring_len(name: &str) -> CodecResult<usize> {
    Ok(utf8_byte_length_with(name, &CodecConfig::default())? + 1)
}

/// Bytes `pack_string` will write for `value`.
pub fn string_len(value: &str) -> CodecResult<usize> {
    Ok(4 + utf8_byte_length_with(value, &CodecConfig::default())? + 1)
}

/// Report transcoder offsets relative to the whole buffer.
fn shift_utf8_offset(err: CodecError, base: usize) -> CodecError {
    match err {
        CodecError::InvalidUtf8 { offset, reason } => CodecError::InvalidUtf8 {
            offset: base + offset,
            reason,
        },
        other => other,
    }
}

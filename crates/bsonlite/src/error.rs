// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the codec core.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = core::result::Result<T, CodecError>;

/// Errors raised while packing, unpacking or transcoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A read or write would cross the end of the supplied buffer.
    #[error("out of bounds at offset {offset}: need {needed} bytes, buffer holds {capacity}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    /// Scalar above U+FFFF while the transcoder is limited to the BMP.
    #[error("unsupported code point U+{code_point:04X} at char index {index}")]
    UnsupportedCodePoint { code_point: u32, index: usize },

    /// Malformed UTF-8 input.
    #[error("invalid UTF-8 at byte {offset}: {reason}")]
    InvalidUtf8 { offset: usize, reason: &'static str },

    /// No zero byte found before the end of the buffer.
    #[error("cstring starting at offset {offset} is not terminated")]
    MissingTerminator { offset: usize },

    /// Fixed-size field built from a slice of the wrong size.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Date/time string that cannot be turned into epoch milliseconds.
    #[error("invalid date: {input:?}")]
    InvalidDate { input: String },
}

impl CodecError {
    pub(crate) fn out_of_bounds(offset: usize, needed: usize, capacity: usize) -> Self {
        CodecError::OutOfBounds {
            offset,
            needed,
            capacity,
        }
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounds-checked read/write cursors over caller-owned buffers.
//!
//! Both cursors start at a caller-supplied offset and never resize the
//! buffer. A failed check leaves the buffer untouched.

use crate::error::{CodecError, CodecResult};

/// Generate little-endian write methods for fixed-width types.
macro_rules! impl_write_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) -> CodecResult<()> {
            self.write_bytes(&value.to_le_bytes())
        }
    };
}

/// Generate little-endian read methods for fixed-width types.
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> CodecResult<$type> {
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(self.read_bytes($size)?);
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Generate position accessors shared by both cursors.
macro_rules! impl_cursor_common {
    () => {
        /// Absolute position in the buffer.
        pub fn offset(&self) -> usize {
            self.offset
        }

        /// Bytes moved since the cursor was created.
        pub fn consumed(&self) -> usize {
            self.offset - self.start
        }

        pub fn remaining(&self) -> usize {
            self.buffer.len().saturating_sub(self.offset)
        }

        /// Fail unless `len` more bytes fit after the current position.
        pub fn ensure(&self, len: usize) -> CodecResult<()> {
            match self.offset.checked_add(len) {
                Some(end) if end <= self.buffer.len() => Ok(()),
                _ => Err(CodecError::out_of_bounds(
                    self.offset,
                    len,
                    self.buffer.len(),
                )),
            }
        }
    };
}

/// Mutable cursor for writing.
pub struct CursorMut<'a> {
    buffer: &'a mut [u8],
    start: usize,
    offset: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::at(buffer, 0)
    }

    /// Cursor positioned at `offset`. Bounds are checked on the first write.
    pub fn at(buffer: &'a mut [u8], offset: usize) -> Self {
        Self {
            buffer,
            start: offset,
            offset,
        }
    }

    impl_write_le!(write_u8, u8);
    impl_write_le!(write_i32_le, i32);
    impl_write_le!(write_u32_le, u32);
    impl_write_le!(write_i64_le, i64);
    impl_write_le!(write_u64_le, u64);

    pub fn write_f64_le(&mut self, value: f64) -> CodecResult<()> {
        self.write_u64_le(value.to_bits())
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> CodecResult<()> {
        self.ensure(data.len())?;
        self.buffer[self.offset..self.offset + data.len()].copy_from_slice(data);
        self.offset += data.len();
        Ok(())
    }

    impl_cursor_common!();
}

/// Immutable cursor for reading.
pub struct Cursor<'a> {
    buffer: &'a [u8],
    start: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::at(buffer, 0)
    }

    pub fn at(buffer: &'a [u8], offset: usize) -> Self {
        Self {
            buffer,
            start: offset,
            offset,
        }
    }

    impl_read_le!(read_u8, u8, 1);
    impl_read_le!(read_i32_le, i32, 4);
    impl_read_le!(read_u32_le, u32, 4);
    impl_read_le!(read_i64_le, i64, 8);
    impl_read_le!(read_u64_le, u64, 8);

    pub fn read_f64_le(&mut self) -> CodecResult<f64> {
        Ok(f64::from_bits(self.read_u64_le()?))
    }

    pub fn read_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        self.ensure(len)?;
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Bytes up to the next zero byte. The terminator is consumed but not
    /// returned.
    pub fn read_until_nul(&mut self) -> CodecResult<&'a [u8]> {
        self.ensure(0)?;
        let tail = &self.buffer[self.offset..];
        let len = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or(CodecError::MissingTerminator {
                offset: self.offset,
            })?;
        let slice = &tail[..len];
        self.offset += len + 1;
        Ok(slice)
    }

    impl_cursor_common!();

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # bsonlite - binary document codec core
//!
//! Low-level building blocks for a self-describing binary document format:
//! fixed-width little-endian packing, cstrings and length-prefixed strings,
//! a 64-bit numeric codec, a byte-level UTF-8 transcoder, and the extended
//! value types (UUID, ObjectId, UTC timestamp).
//!
//! Document traversal and type-tag dispatch live in the caller. The caller
//! sizes the output buffer up front, tracks whether each 8-byte numeric
//! field is `Int64` or `Double`, and keeps `Uuid` and `ObjectId` apart.
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------+
//! |  Document encoder / decoder (caller)    |
//! +-----------------------------------------+
//!       v              v              v
//! +------------+ +-------------+ +----------+
//! |  pack      | |  int64      | |  types   |
//! |  cstring   | |  Int64 /    | |  Uuid    |
//! |  string    | |  Double     | |  ObjectId|
//! |  int32/64  | |             | |  Utc ----+--> int64
//! +------------+ +-------------+ +----------+
//!       v
//! +-----------------------------------------+
//! |  utf8 (byte-level transcoder)           |
//! +-----------------------------------------+
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bsonlite::{pack_cstring, pack_int32, string_len, unpack_cstring};
//!
//! let mut buf = vec![0u8; 4 + string_len("name").unwrap()];
//! let mut offset = 0;
//! offset += pack_int32(7, &mut buf, offset).unwrap();
//! offset += pack_cstring("name", &mut buf, offset).unwrap();
//! assert_eq!(offset, 9);
//! assert_eq!(unpack_cstring(&buf, 4).unwrap(), ("name".to_string(), 5));
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod int64;
pub mod pack;
pub mod types;
pub mod utf8;

pub use crate::config::{CodecConfig, Utf8Mode};
pub use crate::error::{CodecError, CodecResult};
pub use crate::int64::{
    decode_double, decode_i64, decode_int64_as_number, encode_i64, encode_int64_bits,
    split_int64_halves, NumericSubtype, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
};
pub use crate::pack::{
    cstring_len, pack_cstring, pack_cstring_with, pack_double, pack_int32, pack_int64,
    pack_string, pack_string_with, string_len, unpack_cstring, unpack_cstring_with,
    unpack_int32, unpack_string, unpack_string_with, Cursor, CursorMut,
};
pub use crate::types::{Clock, ExtendedType, FixedClock, ObjectId, SystemClock, Utc, Uuid};
pub use crate::utf8::{
    normalize_line_endings, string_to_utf8_bytes, string_to_utf8_bytes_with, utf8_byte_length,
    utf8_byte_length_with, utf8_bytes_to_string, utf8_bytes_to_string_with,
};

/// Version of bsonlite
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

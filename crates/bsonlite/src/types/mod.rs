// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Extended value types.
//!
//! Each type owns its wire bytes and converts to and from them through
//! [`ExtendedType`]. `Uuid` and `ObjectId` share a shape but stay distinct
//! types so an encoder can never tag one as the other.

pub mod clock;
pub mod identifier;
pub mod utc;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifier::{ObjectId, Uuid};
pub use utc::Utc;

use crate::error::CodecResult;

/// Contract between extended types and the document encoder/decoder.
pub trait ExtendedType: Sized {
    /// Short type name, for diagnostics.
    const KIND: &'static str;

    /// Build from wire bytes. The bytes are copied.
    fn from_bytes(bytes: &[u8]) -> CodecResult<Self>;

    /// Wire bytes, unchanged.
    fn buffer(&self) -> &[u8];
}

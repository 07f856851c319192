// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Opaque identifier types.
//!
//! Both own a copy of the bytes they were built from and hand them back
//! untouched. Length is not checked here; `CONVENTIONAL_LEN` is what the
//! wire format expects.

use std::fmt;

use crate::error::CodecResult;
use crate::types::ExtendedType;

/// Generate an opaque byte-buffer identifier type.
macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            id: Box<[u8]>,
        }

        impl $name {
            /// Byte length the wire format expects.
            pub const CONVENTIONAL_LEN: usize = $len;

            /// Copy `bytes` into a new identifier.
            pub fn new(bytes: impl AsRef<[u8]>) -> Self {
                Self {
                    id: bytes.as_ref().into(),
                }
            }

            pub fn len(&self) -> usize {
                self.id.len()
            }

            pub fn is_empty(&self) -> bool {
                self.id.is_empty()
            }
        }

        impl ExtendedType for $name {
            const KIND: &'static str = $kind;

            fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
                Ok(Self::new(bytes))
            }

            fn buffer(&self) -> &[u8] {
                &self.id
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                Self::new(bytes)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self::new(bytes)
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self {
                    id: bytes.into_boxed_slice(),
                }
            }
        }

        /// Lowercase hex.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for b in self.id.iter() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    };
}

define_identifier!(
    /// Generic unique identifier (16 bytes by convention).
    Uuid,
    "uuid",
    16
);

define_identifier!(
    /// Document identifier (12 bytes by convention).
    ObjectId,
    "objectid",
    12
);

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use bsonlite::{string_to_utf8_bytes, utf8_byte_length, utf8_bytes_to_string};

fuzz_target!(|data: &[u8]| {
    // Decoder must agree with std on what is valid UTF-8
    let decoded = utf8_bytes_to_string(data);
    assert_eq!(decoded.is_ok(), std::str::from_utf8(data).is_ok());

    // Whatever decodes must re-encode to the same length it measures
    if let Ok(s) = decoded {
        let bytes = string_to_utf8_bytes(&s).expect("full mode accepts all scalars");
        assert_eq!(utf8_byte_length(&s).expect("full mode"), bytes.len());
    }
});

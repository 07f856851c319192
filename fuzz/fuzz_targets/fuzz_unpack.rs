// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use bsonlite::{decode_int64_as_number, unpack_cstring, unpack_int32, unpack_string};

fuzz_target!(|data: &[u8]| {
    let offset = data.first().map_or(0, |&b| usize::from(b) % 8);

    // None of the readers may panic on arbitrary input
    let _ = unpack_int32(data, offset);
    let _ = unpack_cstring(data, offset);
    let _ = unpack_string(data, offset);
    let _ = decode_int64_as_number(data, offset);
});

//! Fuzz target for JSON decoding.
//!
//! This fuzzer feeds arbitrary byte sequences to the JSON codec,
//! checking for panics, crashes, or hangs.

#![no_main]

use figedit::codec::{Codec, JsonCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid excessive memory usage.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(lines) = JsonCodec.decode(data) {
        // Anything that decodes must encode again.
        JsonCodec.encode(&lines).expect("re-encode decoded json");
    }
});

//! Fuzz target for XML decoding.
//!
//! This fuzzer feeds arbitrary byte sequences to the XML codec,
//! checking for panics, crashes, or hangs.

#![no_main]

use figedit::codec::{Codec, XmlCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid excessive memory usage.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = XmlCodec.decode(data);
});

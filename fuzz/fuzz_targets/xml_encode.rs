//! Fuzz target for XML encoding.
//!
//! Treats the input as text-format lines; whatever the XML codec agrees to
//! write must read back as the same canonical `key: value` lines.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = figedit::codec::io_xml::fuzz_encode_roundtrip(text);
    }
});

//! Fuzz target for raw-line editing.
//!
//! Feeds arbitrary lines to the width/height adjuster.

#![no_main]

use figedit::record::{adjust_line, Field};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let _ = adjust_line(line, Field::Width, 1);
    let _ = adjust_line(line, Field::Height, -1);
});

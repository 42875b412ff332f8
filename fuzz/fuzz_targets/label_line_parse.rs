//! Feeds arbitrary UTF-8 lines to the single-line label parser.

#![no_main]

use boxview::ir::io_yolo::fuzz_parse_label_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    fuzz_parse_label_line(line);
});

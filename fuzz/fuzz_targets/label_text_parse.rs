//! Parses arbitrary text as a whole label file and checks that the
//! lenient and reporting parsers agree.

#![no_main]

use boxview::ir::io_yolo::{parse, parse_with_report};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let plain = parse(text);
    let (reported, report) = parse_with_report(text);
    assert_eq!(plain.len(), report.parsed);
    assert_eq!(plain.len(), reported.len());
});

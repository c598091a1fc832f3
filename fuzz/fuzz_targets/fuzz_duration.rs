#![no_main]

use libfuzzer_sys::fuzz_target;
use mirrorwatch::config::{format_duration, parse_duration};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(duration) = parse_duration(input) {
            let text = format_duration(duration);
            assert_eq!(parse_duration(&text).ok(), Some(duration), "{input:?} -> {text:?}");
        }
    }
});

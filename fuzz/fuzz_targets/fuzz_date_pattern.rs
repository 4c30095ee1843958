#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(pattern) = rechnung::core::DatePattern::parse(s) {
            let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
            let _ = pattern.format(date);
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(pattern) = rechnung::core::DecimalPattern::parse(s) {
            let _ = pattern.format(
                Decimal::new(123456789, 3),
                &rechnung::core::DecimalSymbols::default(),
            );
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use rechnung::loaders::OrdersLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = OrdersLoader::new().from_json(s);
    }
});

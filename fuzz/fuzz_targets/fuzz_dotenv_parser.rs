//! Fuzz target for dotenv parsing.
//!
//! Goal: The parser should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_dotenv_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let values = envguard_dotenv::parse_dotenv(&text);
    let keys = envguard_dotenv::declared_keys(&text);

    // Every parsed key is also a declared key.
    for key in values.keys() {
        assert!(keys.contains(key));
    }

    for raw in envguard_dotenv::split_lines(&text) {
        let _ = envguard_dotenv::normalize_value(raw);
    }
});

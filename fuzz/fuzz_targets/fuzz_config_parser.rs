//! Fuzz target for `envguard.toml` parsing and rule resolution.
//!
//! Parsing may fail; resolution of anything that parses must not panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = envguard_settings::parse_config_toml(text)
    {
        let _ = envguard_settings::resolve_config(&cfg, &envguard_settings::Overrides::default());
    }
});

//! Fuzz target for catalog TOML parsing and resolution.
//!
//! Goal: parse + resolve should **never panic** on any input. They may
//! return errors for malformed catalogs, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(cfg) = stepup_settings::parse_catalog_toml(text) {
        let _ = stepup_settings::resolve_catalog(cfg);
    }
});

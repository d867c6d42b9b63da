//! Fuzz target for state JSON parsing.
//!
//! Goal: the state parser should **never panic** on any input, including
//! hand-edited files with corrupted timestamps.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_state_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(directory) = stepup_store::parse_state_json(text) {
        // Round-trip: whatever parsed must serialize again.
        let _ = stepup_store::render_state_json(&directory);
    }
});

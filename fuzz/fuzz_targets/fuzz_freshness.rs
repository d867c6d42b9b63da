//! Fuzz target for the freshness oracle.
//!
//! Goal: `is_action_still_valid` must **never panic**, whatever the stored
//! timestamps, window sizes, or clock readings look like.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_freshness
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stepup_domain::model::PastAction;

/// Structured input so libFuzzer generates meaningful histories.
#[derive(Arbitrary, Debug)]
struct FreshnessInput {
    history: Vec<(String, String)>,
    method: String,
    max_age_secs: i64,
    now_ms: i64,
}

fuzz_target!(|input: FreshnessInput| {
    // Limit input size to keep fuzzing fast
    if input.history.len() > 100 {
        return;
    }

    let history: Vec<PastAction> = input
        .history
        .into_iter()
        .map(|(method, validated_at)| PastAction {
            method,
            validated_at,
        })
        .collect();

    let _ = stepup_domain::is_action_still_valid(
        &history,
        &input.method,
        input.max_age_secs,
        input.now_ms,
    );
});

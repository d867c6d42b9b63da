//! Shared test utilities for the stepup workspace.
//!
//! Lives in its own crate because both `xtask` and the CLI integration
//! tests need `normalize_nondeterministic` outside `#[cfg(test)]`.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only** — `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a decision envelope (has all four
///    keys: `schema`, `tool`, `started_at`, `decision`). This prevents
///    false normalization of nested objects that happen to share the shape.
///
/// 2. **Recursive** — timestamp keys (`started_at`, `finished_at`) are
///    normalized at any depth because their placeholder value is fixed and
///    cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("started_at")
            && obj.contains_key("decision");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_version_and_timestamps() {
        let value = json!({
            "schema": "stepup.decision.v1",
            "tool": { "name": "stepup", "version": "0.1.0" },
            "started_at": "2026-01-21T12:42:19Z",
            "finished_at": "2026-01-21T12:42:19Z",
            "decision": { "status": "OK" },
        });

        let normalized = normalize_nondeterministic(value);
        assert_eq!(normalized["tool"]["version"], "__VERSION__");
        assert_eq!(normalized["started_at"], "__TIMESTAMP__");
        assert_eq!(normalized["finished_at"], "__TIMESTAMP__");
    }

    #[test]
    fn non_envelope_roots_keep_their_version() {
        let value = json!({ "tool": { "name": "x", "version": "9.9.9" } });
        let normalized = normalize_nondeterministic(value);
        assert_eq!(normalized["tool"]["version"], "9.9.9");
    }
}

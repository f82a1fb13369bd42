//! Shared test utilities for the envguard workspace.
//!
//! Lives outside `#[cfg(test)]` because the CLI integration tests and `xtask` both need it.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, but only when the *root* object is a report
///   envelope (`schema`, `tool`, `run`, `ok`).
/// - `started_at` / `ended_at` become `"__TIMESTAMP__"` and `duration_ms` becomes `0`
///   at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("run")
            && obj.contains_key("ok");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
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

/// Replace every occurrence of `needle` inside string values (keys untouched).
///
/// Used to swap temp-dir prefixes in `source` and `_env_file` messages for a stable placeholder.
pub fn redact_in_strings(mut value: Value, needle: &str, replacement: &str) -> Value {
    if !needle.is_empty() {
        redact_recursive(&mut value, needle, replacement);
    }
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
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

fn redact_recursive(value: &mut Value, needle: &str, replacement: &str) {
    match value {
        Value::String(s) if s.contains(needle) => {
            *s = s.replace(needle, replacement);
        }
        Value::Object(map) => {
            for val in map.values_mut() {
                redact_recursive(val, needle, replacement);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                redact_recursive(val, needle, replacement);
            }
        }
        _ => {}
    }
}

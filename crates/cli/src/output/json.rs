//! JSON output formatting.

use serde_json::Value;

/// Format a value as compact JSON.
pub fn format_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

//! JSON output formatting.

use serde_json::json;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a status message, with an optional id, as a JSON object.
pub fn format_status(ok: bool, message: &str, id: Option<i64>) -> String {
    let mut value = json!({ "ok": ok, "message": message });
    if let Some(id) = id {
        value["id"] = json!(id);
    }
    value.to_string()
}

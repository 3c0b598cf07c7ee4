//! Response shape normalization.
//!
//! The collection resource answers either with an envelope
//! `{ "success": bool, "data": T }` or with a bare `T`. This is the only
//! place in the crate that knows about both shapes.

use serde::de::DeserializeOwned;
use serde_json::Value;

const SUCCESS_FIELD: &str = "success";
const DATA_FIELD: &str = "data";
const MESSAGE_FIELD: &str = "message";

/// Reduce a success body to its payload.
///
/// Returns `None` when an envelope reports `success != true`, when its `data`
/// is absent or null, or when the payload does not deserialize into `T`.
pub fn normalize<T: DeserializeOwned>(body: Value) -> Option<T> {
    let payload = match body {
        Value::Object(mut object) if object.contains_key(SUCCESS_FIELD) => {
            if object.get(SUCCESS_FIELD) != Some(&Value::Bool(true)) {
                return None;
            }
            match object.remove(DATA_FIELD) {
                Some(Value::Null) | None => return None,
                Some(data) => data,
            }
        }
        bare => bare,
    };
    serde_json::from_value(payload).ok()
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `message` as a string or as an array of strings (joined with `"; "`).
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = match value.get(MESSAGE_FIELD)? {
        Value::String(text) => text.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!message.is_empty()).then_some(message)
}

//! Transcript extraction from provider JSON responses.
//!
//! Providers disagree on where the recognised text lives.  The lookup order
//! is:
//!
//! 1. `{ "text": "…" }`
//! 2. `{ "result": "…" }`
//! 3. `{ "results": [ { "text": "…" }, … ] }` (first element only)
//!
//! The first hit is trimmed and returned.

use serde_json::Value;

/// Extract the recognised text from a provider response body.
///
/// Returns `None` when none of the known shapes match; callers treat that
/// as "nothing recognised".
pub fn transcript_from_response(body: &Value) -> Option<String> {
    let text = body
        .get("text")
        .filter(|v| !v.is_null())
        .or_else(|| body.get("result").filter(|v| !v.is_null()))
        .or_else(|| {
            body.get("results")
                .and_then(Value::as_array)
                .and_then(|results| results.first())
                .and_then(|first| first.get("text"))
                .filter(|v| !v.is_null())
        });

    match text {
        Some(value) => Some(value_to_text(value).trim().to_owned()),
        None => {
            log::warn!("no transcript field found in STT response: {body}");
            None
        }
    }
}

/// Plain strings come back unquoted; any other JSON value is rendered as-is.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

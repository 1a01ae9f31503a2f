//! Locates and parses the structured payload embedded in an oracle reply.

use serde_json::Value;
use thiserror::Error;

use super::scanner::{outermost_spans, SpanKind};

const FENCE: &str = "```";

/// Errors from payload extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// No recognisable payload, or the payload failed to parse.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl ExtractionError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}

/// Extracts the structured payload from free text.
///
/// Resolution order, first match wins:
/// 1. the first fenced block tagged `json`; its interior must parse
/// 2. the first outermost `[...]` span that parses to an array of objects
/// 3. the first outermost `{...}` span that parses to a non-empty object
///
/// The returned value is not checked against any schema.
pub fn extract_structured_payload(text: &str) -> Result<Value, ExtractionError> {
    if let Some(interior) = first_json_fence(text) {
        return serde_json::from_str(interior).map_err(|e| {
            ExtractionError::malformed(format!("fenced json block does not parse: {}", e))
        });
    }

    let spans = outermost_spans(text, |candidate| {
        serde_json::from_str::<Value>(candidate)
            .map(|value| is_record_shaped(&value))
            .unwrap_or(false)
    });

    for kind in [SpanKind::Array, SpanKind::Object] {
        if let Some(span) = spans.iter().find(|span| span.kind == kind) {
            return serde_json::from_str(span.slice(text))
                .map_err(|e| ExtractionError::malformed(e.to_string()));
        }
    }

    Err(ExtractionError::malformed(
        "no json block, record array or record object found",
    ))
}

/// Bare spans must look like records: an array whose first element is an
/// object, or an object with at least one key. Citation markers such as
/// `[1]` and empty containers are skipped.
fn is_record_shaped(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.first().is_some_and(Value::is_object),
        Value::Object(fields) => !fields.is_empty(),
        _ => false,
    }
}

/// Returns the interior of the first closed fence whose info tag is `json`.
fn first_json_fence(text: &str) -> Option<&str> {
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(FENCE) {
        let after_open = cursor + offset + FENCE.len();
        let rest = &text[after_open..];

        let tag_len = rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(rest.len());
        let tag = &rest[..tag_len];
        let body_start = after_open + tag_len;

        let close = text[body_start..].find(FENCE)?;
        let body_end = body_start + close;

        if tag.eq_ignore_ascii_case("json") {
            return Some(text[body_start..body_end].trim());
        }

        cursor = body_end + FENCE.len();
    }

    None
}

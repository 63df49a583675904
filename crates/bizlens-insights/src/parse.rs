//! Narrowing a free-form model reply down to a JSON object.
//!
//! Models often wrap the requested JSON in conversational padding
//! (`"Sure! Here it is: {...} Let me know..."`). The first balanced
//! brace-delimited span is taken as the payload. Braces inside JSON string
//! literals, including escaped quotes, do not affect the balance.

use serde_json::Value;

use crate::error::InsightError;
use crate::types::InsightFields;

/// Returns the first balanced `{ ... }` span of `raw`, if any.
#[must_use]
pub fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&raw[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses the model's message text into insight fields.
///
/// # Errors
///
/// - [`InsightError::InvalidJson`] if no balanced brace span exists.
/// - [`InsightError::Parse`] if the span is not valid JSON.
pub fn parse_insight_reply(raw: &str) -> Result<InsightFields, InsightError> {
    let span = extract_json_span(raw).ok_or(InsightError::InvalidJson)?;
    let value: Value = serde_json::from_str(span)?;
    into_object(value)
}

pub(crate) fn into_object(value: Value) -> Result<InsightFields, InsightError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(InsightError::NotAnObject { kind: "null" }),
        Value::Bool(_) => Err(InsightError::NotAnObject { kind: "a boolean" }),
        Value::Number(_) => Err(InsightError::NotAnObject { kind: "a number" }),
        Value::String(_) => Err(InsightError::NotAnObject { kind: "a string" }),
        Value::Array(_) => Err(InsightError::NotAnObject { kind: "an array" }),
    }
}

/// Drops fields whose value is `""`, `[]`, or `null`. Other values, including
/// `{}` and whitespace-only strings, are kept.
#[must_use]
pub fn strip_empty_fields(fields: InsightFields) -> InsightFields {
    fields
        .into_iter()
        .filter(|(_, v)| !is_empty_value(v))
        .collect()
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::InsightFields;

/// Key under which a failed request is recorded in a row.
pub const ERROR_FIELD: &str = "error";

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered, but without a `choices` list. Carries the raw
    /// reply so the provider's own error message is preserved.
    #[error("{payload}")]
    MissingChoices { payload: Value },

    #[error("completion has no message content")]
    EmptyCompletion,

    #[error("reply is not JSON: {0}")]
    Decode(String),

    /// No brace-delimited span in the model's message text.
    #[error("Invalid AI JSON")]
    InvalidJson,

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

/// Converts a failure into the single-key `{"error": ...}` mapping merged
/// into the row.
#[must_use]
pub fn error_fields(err: &InsightError) -> InsightFields {
    let value = match err {
        InsightError::MissingChoices { payload } => payload.clone(),
        other => Value::String(other.to_string()),
    };
    let mut fields = Map::new();
    fields.insert(ERROR_FIELD.to_string(), value);
    fields
}

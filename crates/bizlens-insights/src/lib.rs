//! Business-insight extraction through an OpenAI-compatible chat endpoint.
//!
//! Page text goes in with a fixed B2B instruction template; a loosely
//! formatted reply comes back and is narrowed to a JSON object of insight
//! fields.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod rate_limit;
pub mod types;

pub use client::{InsightClient, InsightSettings};
pub use error::{error_fields, InsightError, ERROR_FIELD};
pub use parse::{extract_json_span, parse_insight_reply, strip_empty_fields};
pub use prompt::{build_prompt, FieldKind, InsightField, INSIGHT_FIELDS, SUMMARY_FIELD};
pub use rate_limit::MinIntervalGate;
pub use types::InsightFields;

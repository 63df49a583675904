//! Wire types for the OpenAI-compatible chat-completion endpoint.
//!
//! Only the fields this crate reads are modelled on the response side. The
//! reply is first decoded as a loose [`serde_json::Value`] so a missing
//! `choices` key can be reported with the whole payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed insight mapping: field name to JSON value.
pub type InsightFields = Map<String, Value>;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

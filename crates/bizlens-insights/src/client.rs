//! HTTP client for the chat-completion endpoint.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::InsightError;
use crate::parse::{parse_insight_reply, strip_empty_fields};
use crate::prompt::build_prompt;
use crate::rate_limit::MinIntervalGate;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, InsightFields};

/// Everything needed to talk to the model endpoint.
#[derive(Clone)]
pub struct InsightSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub calls_per_minute: u32,
    pub include_summary: bool,
    pub keep_empty_fields: bool,
}

impl InsightSettings {
    #[must_use]
    pub fn from_app_config(config: &bizlens_core::AppConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout_secs: config.model_timeout_secs,
            calls_per_minute: config.model_calls_per_minute,
            include_summary: config.include_summary,
            keep_empty_fields: config.keep_empty_fields,
        }
    }
}

impl std::fmt::Debug for InsightSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightSettings")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("calls_per_minute", &self.calls_per_minute)
            .field("include_summary", &self.include_summary)
            .field("keep_empty_fields", &self.keep_empty_fields)
            .finish()
    }
}

/// Requests structured insight fields for one site at a time.
///
/// Every request passes through a [`MinIntervalGate`] sized from
/// `calls_per_minute`. Nothing is retried: a failed call is final for that
/// site.
pub struct InsightClient {
    client: Client,
    settings: InsightSettings,
    gate: MinIntervalGate,
}

impl InsightClient {
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: InsightSettings) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.timeout_secs.min(10)))
            .build()?;
        let gate = MinIntervalGate::per_minute(settings.calls_per_minute);
        Ok(Self {
            client,
            settings,
            gate,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &InsightSettings {
        &self.settings
    }

    /// Minimum spacing enforced between two model requests.
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.gate.interval()
    }

    /// Sends `text` for `url` and returns the parsed insight fields.
    ///
    /// Empty fields (`""`, `[]`, `null`) are dropped unless
    /// `keep_empty_fields` is set.
    ///
    /// # Errors
    ///
    /// - [`InsightError::Http`] on transport failure or timeout.
    /// - [`InsightError::Decode`] if the reply body is not JSON.
    /// - [`InsightError::MissingChoices`] if the reply has no `choices` key.
    /// - [`InsightError::EmptyCompletion`] if the first choice has no text.
    /// - [`InsightError::InvalidJson`] / [`InsightError::Parse`] if the
    ///   message text holds no usable JSON object.
    pub async fn request_insights(
        &self,
        url: &str,
        text: &str,
    ) -> Result<InsightFields, InsightError> {
        let content = self.request_completion(url, text).await?;
        let fields = parse_insight_reply(&content)?;
        if self.settings.keep_empty_fields {
            Ok(fields)
        } else {
            Ok(strip_empty_fields(fields))
        }
    }

    async fn request_completion(&self, url: &str, text: &str) -> Result<String, InsightError> {
        let prompt = build_prompt(url, text, self.settings.include_summary);
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.settings.temperature,
        };

        self.gate.acquire().await;

        let mut request = self.client.post(&self.settings.api_url).json(&body);
        if let Some(key) = &self.settings.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let payload: Value =
            serde_json::from_str(&raw).map_err(|e| InsightError::Decode(e.to_string()))?;

        if payload.get("choices").is_none() {
            tracing::warn!(url, status = status.as_u16(), "model reply has no choices");
            return Err(InsightError::MissingChoices { payload });
        }

        let parsed: ChatResponse =
            serde_json::from_value(payload).map_err(|e| InsightError::Decode(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(InsightError::EmptyCompletion)
    }
}

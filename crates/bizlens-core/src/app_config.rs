/// Default chat-completion endpoint (Groq's OpenAI-compatible API).
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model identifier sent with every insight request.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone)]
pub struct AppConfig {
    /// `None` when `GROQ_API_KEY` is unset. Callers surface a notice and keep
    /// going; requests then fail per row.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub model_timeout_secs: u64,
    pub user_agent: String,
    pub max_text_chars: usize,
    pub batch_size: usize,
    pub model_calls_per_minute: u32,
    pub include_summary: bool,
    pub keep_empty_fields: bool,
}

impl AppConfig {
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("log_level", &self.log_level)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("model_timeout_secs", &self.model_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_text_chars", &self.max_text_chars)
            .field("batch_size", &self.batch_size)
            .field("model_calls_per_minute", &self.model_calls_per_minute)
            .field("include_summary", &self.include_summary)
            .field("keep_empty_fields", &self.keep_empty_fields)
            .finish()
    }
}

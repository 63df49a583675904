use crate::app_config::{AppConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The API key is optional here on purpose: a missing key is reported to the
/// user by the caller, it does not stop configuration from loading.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        parse_flag(&raw).ok_or_else(|| invalid(var, format!("expected a boolean, got \"{raw}\"")))
    };

    let api_key = lookup("GROQ_API_KEY").ok().filter(|k| !k.trim().is_empty());
    let api_url = or_default("BIZLENS_API_URL", DEFAULT_API_URL);
    let model = or_default("BIZLENS_MODEL", DEFAULT_MODEL);
    let log_level = or_default("BIZLENS_LOG_LEVEL", "info");
    let user_agent = or_default("BIZLENS_USER_AGENT", "Mozilla/5.0");

    let temperature_raw = or_default("BIZLENS_TEMPERATURE", "0.1");
    let temperature = temperature_raw
        .parse::<f32>()
        .map_err(|e| invalid("BIZLENS_TEMPERATURE", e.to_string()))?;
    if !(0.0..=2.0).contains(&temperature) {
        return Err(invalid(
            "BIZLENS_TEMPERATURE",
            format!("{temperature} is outside 0.0..=2.0"),
        ));
    }

    let fetch_timeout_secs = parse_u64("BIZLENS_FETCH_TIMEOUT_SECS", "12")?;
    let model_timeout_secs = parse_u64("BIZLENS_MODEL_TIMEOUT_SECS", "30")?;
    let max_text_chars = parse_usize("BIZLENS_MAX_TEXT_CHARS", "4000")?;
    let batch_size = parse_usize("BIZLENS_BATCH_SIZE", "50")?;
    let model_calls_per_minute = parse_u32("BIZLENS_MODEL_CALLS_PER_MINUTE", "2")?;
    let include_summary = parse_bool("BIZLENS_INCLUDE_SUMMARY", "false")?;
    let keep_empty_fields = parse_bool("BIZLENS_KEEP_EMPTY_FIELDS", "false")?;

    Ok(AppConfig {
        api_key,
        api_url,
        model,
        temperature,
        log_level,
        fetch_timeout_secs,
        model_timeout_secs,
        user_agent,
        max_text_chars,
        batch_size,
        model_calls_per_minute,
        include_summary,
        keep_empty_fields,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

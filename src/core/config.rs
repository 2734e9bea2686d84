use std::env;

use reqwest::Url;

/// Backend used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Model sent when the page has no model selector (or it is empty).
pub const DEFAULT_MODEL: &str = "qwen2.5-coder:0.5b";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis API, without trailing slash.
    pub api_base_url: String,
    pub default_model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(String),
    #[error("API_BASE_URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("TEXT_ANALYZER_MODEL is set but empty")]
    EmptyModel,
}

/// Load configuration from environment.
pub fn load() -> Result<Config, ConfigError> {
    from_values(
        env::var("API_BASE_URL").ok(),
        env::var("TEXT_ANALYZER_MODEL").ok(),
    )
}

/// Build a config from raw values; `None` falls back to the defaults.
pub fn from_values(
    base_url: Option<String>,
    model: Option<String>,
) -> Result<Config, ConfigError> {
    let raw = base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl(format!("{raw} ({e})")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
    }

    let default_model = match model {
        Some(m) if m.trim().is_empty() => return Err(ConfigError::EmptyModel),
        Some(m) => m.trim().to_string(),
        None => DEFAULT_MODEL.to_string(),
    };

    Ok(Config {
        api_base_url: raw.trim_end_matches('/').to_string(),
        default_model,
    })
}

use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: Option<LlmConfig>,
    pub taste: Option<TasteConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// LLM configuration for the completion service.
///
/// Present only when `LLM_MODEL` is set. Requests that need the completion
/// service fail with a configuration error when this is `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

/// Configuration for the cultural-recommendation graph service.
///
/// Present only when `TASTE_API_KEY` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct TasteConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

const DEFAULT_TASTE_BASE_URL: &str = "https://hackathon.api.qloo.com";

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("VIBETRAIL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("VIBETRAIL_PORT", 3000),
            },
            llm: env::var("LLM_MODEL").ok().map(|model| LlmConfig {
                model,
                api_key: env::var("LLM_API_KEY").ok(),
                base_url: env::var("LLM_BASE_URL").ok(),
                // Completion calls are observably slower than graph lookups,
                // so they get the longer default.
                timeout_secs: parse_env_or("LLM_TIMEOUT", 60),
            }),
            taste: env::var("TASTE_API_KEY").ok().map(|api_key| TasteConfig {
                api_key,
                base_url: env::var("TASTE_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_TASTE_BASE_URL.to_string()),
                timeout_secs: parse_env_or("TASTE_TIMEOUT", 10),
            }),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Known LLM providers that use OpenAI-compatible APIs
pub const KNOWN_LLM_PROVIDERS: &[&str] = &["openai", "openrouter", "ollama", "lmstudio"];

/// Parse an LLM model name into (provider, model) tuple.
pub fn parse_llm_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_LLM_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    // Default to treating the whole string as a local model
    ("local", model)
}

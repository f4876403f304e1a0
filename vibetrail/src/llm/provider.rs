use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{parse_llm_provider_model, LlmConfig};
use crate::error::{Result, VibeError};
use crate::llm::api::LlmApiClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    OpenAI,
    OpenRouter,
    Ollama,
    LmStudio,
    OpenAICompatible { base_url: String },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Outcome of a structured completion where the caller wants to keep going
/// when the model's reply fails to parse.
///
/// This is the single boundary between "parsed into the expected shape" and
/// "failure, raw text preserved" that fallback logic composes on. Transport
/// errors still surface as `Err` from the calling method.
#[derive(Debug, Clone)]
pub enum StructuredReply<T> {
    Parsed(T),
    Unparsed { raw: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct LlmProvider {
    backend: LlmBackend,
    config: Option<Arc<LlmConfig>>,
}

impl LlmProvider {
    pub fn new(config: Option<&LlmConfig>) -> Self {
        let Some(config) = config else {
            return Self::unavailable("No LLM configuration provided");
        };

        let (provider, _model) = parse_llm_provider_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "openai" => LlmBackend::OpenAI,
            "openrouter" => LlmBackend::OpenRouter,
            "ollama" => LlmBackend::Ollama,
            "lmstudio" => LlmBackend::LmStudio,
            _ => {
                if let Some(base_url) = &config.base_url {
                    LlmBackend::OpenAICompatible {
                        base_url: base_url.clone(),
                    }
                } else {
                    LlmBackend::Unavailable {
                        reason: format!("Unknown provider in model: {}", config.model),
                    }
                }
            }
        };

        Self {
            backend,
            config: Some(Arc::new(config.clone())),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            backend: LlmBackend::Unavailable {
                reason: reason.to_string(),
            },
            config: None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, LlmBackend::Unavailable { .. })
    }

    pub fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    pub fn config(&self) -> Option<&LlmConfig> {
        self.config.as_deref()
    }

    pub async fn complete(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<String> {
        self.client()?.complete(prompt, None, options).await
    }

    pub async fn complete_json(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<Value> {
        self.client()?.complete_json(prompt, None, options).await
    }

    /// Complete and deserialize into `T`. Parse failure is an error; callers
    /// that need a fallback path use [`complete_structured_or_raw`] instead.
    ///
    /// [`complete_structured_or_raw`]: Self::complete_structured_or_raw
    pub async fn complete_structured<T: DeserializeOwned>(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<T> {
        let json_value = self.complete_json(prompt, options).await?;

        serde_json::from_value(json_value)
            .map_err(|e| VibeError::Llm(format!("Failed to deserialize response: {e}")))
    }

    /// Complete and attempt to deserialize into `T`, preserving the raw reply
    /// text when it does not parse. Transport and API errors remain `Err`.
    pub async fn complete_structured_or_raw<T: DeserializeOwned>(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<StructuredReply<T>> {
        let content = self.client()?.complete(prompt, None, options).await?;
        let payload = crate::llm::strip_code_fences(&content);

        match serde_json::from_str::<T>(payload) {
            Ok(parsed) => Ok(StructuredReply::Parsed(parsed)),
            Err(e) => Ok(StructuredReply::Unparsed {
                raw: content.clone(),
                reason: e.to_string(),
            }),
        }
    }

    fn client(&self) -> Result<LlmApiClient> {
        if !self.is_available() {
            return Err(VibeError::LlmUnavailable(self.unavailable_reason()));
        }

        let config = self
            .config()
            .ok_or_else(|| VibeError::LlmUnavailable("No config available".to_string()))?;

        LlmApiClient::new(config)
    }

    fn unavailable_reason(&self) -> String {
        match &self.backend {
            LlmBackend::Unavailable { reason } => reason.clone(),
            _ => "LLM completion is not available".to_string(),
        }
    }
}

//! LLM client abstractions and provider selection
//!
//! This module provides a unified interface over the generation services the
//! assistant can talk to:
//! - **Gemini**: Google's generative-language API (default)
//! - **Ollama**: local inference for development

use crate::types::{AppError, Result};
use crate::utils::toml_config::{AssistantConfig, ConfigManager, ProviderKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Generic LLM client trait for provider abstraction
///
/// All providers implement this trait, so the assistant engine never needs
/// to know which service it is talking to.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with a system instruction
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini `generateContent` API
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::Gemini {
    ///     api_key: std::env::var("GEMINI_API_KEY").ok(),
    ///     api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
    ///     model: "gemini-flash-latest".to_string(),
    ///     timeout: None,
    /// };
    /// ```
    Gemini {
        /// Credential; `None` or empty fails client creation.
        api_key: Option<String>,
        /// API root, without a trailing slash
        api_base: String,
        /// Model identifier
        model: String,
        /// Optional request timeout
        timeout: Option<Duration>,
    },

    /// Ollama local LLM provider
    #[cfg(feature = "ollama")]
    Ollama {
        /// Server root, e.g. `http://localhost:11434`
        base_url: String,
        /// Model identifier
        model: String,
        /// Optional request timeout
        timeout: Option<Duration>,
    },
}

impl Provider {
    /// Resolve a provider from the `[assistant]` section, reading the
    /// credential from the configured environment variable.
    pub fn from_config(config: &AssistantConfig) -> Self {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        match config.provider {
            ProviderKind::Gemini => Provider::Gemini {
                api_key: std::env::var(&config.api_key_env).ok(),
                api_base: config.api_base.trim_end_matches('/').to_string(),
                model: config.model.clone(),
                timeout,
            },
            #[cfg(feature = "ollama")]
            ProviderKind::Ollama => Provider::Ollama {
                base_url: config.ollama_url.trim_end_matches('/').to_string(),
                model: config.model.clone(),
                timeout,
            },
            #[cfg(not(feature = "ollama"))]
            ProviderKind::Ollama => {
                tracing::warn!("Built without the 'ollama' feature; using Gemini instead");
                Provider::Gemini {
                    api_key: std::env::var(&config.api_key_env).ok(),
                    api_base: config.api_base.trim_end_matches('/').to_string(),
                    model: config.model.clone(),
                    timeout,
                }
            }
        }
    }

    /// Create a client instance for this provider
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when the Gemini credential is
    /// missing. No request is sent in that case.
    pub async fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            Provider::Gemini {
                api_key,
                api_base,
                model,
                timeout,
            } => {
                let api_key = api_key
                    .as_deref()
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| AppError::Configuration(missing_key_message()))?;
                Ok(Box::new(super::gemini::GeminiClient::new(
                    api_key.to_string(),
                    api_base.clone(),
                    model.clone(),
                    *timeout,
                )?))
            }

            #[cfg(feature = "ollama")]
            Provider::Ollama {
                base_url,
                model,
                timeout,
            } => Ok(Box::new(super::ollama::OllamaClient::new(
                base_url.clone(),
                model.clone(),
                *timeout,
            )?)),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini { .. } => "Gemini",
            #[cfg(feature = "ollama")]
            Provider::Ollama { .. } => "Ollama",
        }
    }

    /// Model this provider will use
    pub fn model(&self) -> &str {
        match self {
            Provider::Gemini { model, .. } => model,
            #[cfg(feature = "ollama")]
            Provider::Ollama { model, .. } => model,
        }
    }
}

fn missing_key_message() -> String {
    "Gemini API key is missing. Please ensure GEMINI_API_KEY is set in your environment variables."
        .to_string()
}

pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

/// Something that can hand out LLM clients.
#[async_trait]
pub trait LLMClientFactoryTrait: Send + Sync {
    /// Provider that `create_default` will use right now
    fn default_provider(&self) -> Provider;

    /// Create a client using the default provider
    async fn create_default(&self) -> Result<Box<dyn LLMClient>>;
}

/// Factory with a fixed default provider.
///
/// # Example
///
/// ```rust,ignore
/// use omniroute::llm::{LLMClientFactory, Provider};
///
/// let factory = LLMClientFactory::new(Provider::Gemini { /* ... */ });
/// let client = factory.create_default().await?;
/// ```
pub struct LLMClientFactory {
    default_provider: Provider,
}

impl LLMClientFactory {
    /// Create a new factory with the specified default provider
    pub fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }
}

#[async_trait]
impl LLMClientFactoryTrait for LLMClientFactory {
    fn default_provider(&self) -> Provider {
        self.default_provider.clone()
    }

    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        self.default_provider.create_client().await
    }
}

/// Factory that re-reads the `[assistant]` section on every call, so hot
/// reloads and late-set credentials take effect without a restart.
pub struct ConfigBasedLLMFactory {
    config: Arc<ConfigManager>,
}

impl ConfigBasedLLMFactory {
    /// Create a factory backed by a configuration manager
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl LLMClientFactoryTrait for ConfigBasedLLMFactory {
    fn default_provider(&self) -> Provider {
        Provider::from_config(&self.config.config().assistant)
    }

    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        self.default_provider().create_client().await
    }
}

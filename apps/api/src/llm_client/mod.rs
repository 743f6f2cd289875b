/// LLM Client: the single point of entry for all text-generation calls in Tailor.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// All LLM interactions MUST go through `LlmClient`, which also owns the
/// cache-checked call path.
///
/// Two interchangeable backends implement `TextGenerator`. The one in use is
/// fixed at startup by `Provider`; every call is a single attempt.
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::cache::{CacheKey, CallKind, ResponseCache};
use crate::config::LlmConfig;

pub mod anthropic;
pub mod openai;
pub mod prompts;
#[cfg(test)]
pub mod testing;

pub use anthropic::AnthropicGenerator;
pub use openai::OpenAiGenerator;

pub(crate) const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT_SECS: u64 = 120;
/// Credential prefix that routes to Anthropic when no provider is configured.
const ANTHROPIC_KEY_PREFIX: &str = "sk-ant-";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key configured for the language model")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyResponse,

    #[error("LLM returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// The text-generation backend in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    OpenAi,
    Anthropic,
}

#[derive(Debug, Error)]
#[error("unknown LLM provider '{0}' (expected 'openai' or 'anthropic')")]
pub struct UnknownProvider(String);

impl Provider {
    /// Legacy dispatch on credential shape, used when no provider is configured.
    pub fn from_credential(api_key: &str) -> Self {
        if api_key.trim().starts_with(ANTHROPIC_KEY_PREFIX) {
            Provider::Anthropic
        } else {
            Provider::OpenAi
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o",
            Provider::Anthropic => "claude-sonnet-4-5",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "open_ai" => Ok(Provider::OpenAi),
            "anthropic" | "claude" => Ok(Provider::Anthropic),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

/// Capability shared by both backends: one system + user prompt in, raw text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;

    fn provider(&self) -> Provider;

    fn model(&self) -> &str;
}

/// The single LLM client used by all services in Tailor.
/// Holds no backend when the service was started without a credential.
#[derive(Clone)]
pub struct LlmClient {
    backend: Option<Arc<dyn TextGenerator>>,
}

impl LlmClient {
    pub fn from_config(config: &LlmConfig) -> anyhow::Result<Self> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(Self::unconfigured());
        };

        let provider = config
            .resolved_provider()
            .unwrap_or_else(|| Provider::from_credential(&api_key));
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| provider.default_model().to_string());

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let backend: Arc<dyn TextGenerator> = match provider {
            Provider::OpenAi => Arc::new(OpenAiGenerator::new(
                http,
                api_key,
                model,
                config.openai_base_url.clone(),
            )),
            Provider::Anthropic => Arc::new(AnthropicGenerator::new(
                http,
                api_key,
                model,
                config.anthropic_base_url.clone(),
            )),
        };

        info!(
            "LLM backend selected: {} ({})",
            backend.provider().as_str(),
            backend.model()
        );
        Ok(Self::with_generator(backend))
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend: Some(generator),
        }
    }

    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    pub fn provider(&self) -> Option<Provider> {
        self.backend.as_ref().map(|b| b.provider())
    }

    pub fn model(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.model())
    }

    /// Makes one uncached call. Whitespace-only output is reported as `EmptyResponse`.
    pub async fn generate(&self, prompt: &str, system: &str) -> Result<String, GenerationError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(GenerationError::MissingCredential)?;

        let text = backend.generate(system, prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    /// Cache-checked call. A hit never reaches the backend; failures are not stored.
    /// With `use_cache == false` the cache is neither read nor written.
    pub async fn generate_cached(
        &self,
        cache: &mut ResponseCache,
        kind: CallKind,
        prompt: &str,
        system: &str,
        use_cache: bool,
    ) -> Result<String, GenerationError> {
        if !use_cache {
            return self.generate(prompt, system).await;
        }

        let key = CacheKey::of(prompt);
        if let Some(entry) = cache.get(kind, &key) {
            debug!("Cache hit for {kind} ({})", &key.as_str()[..12]);
            return Ok(entry.response_text.clone());
        }
        debug!("Cache miss for {kind} ({})", &key.as_str()[..12]);

        let text = self.generate(prompt, system).await?;
        cache.set(kind, key, text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedGenerator;
    use super::*;

    #[test]
    fn test_provider_from_credential_shape() {
        assert_eq!(
            Provider::from_credential("sk-ant-api03-xyz"),
            Provider::Anthropic
        );
        assert_eq!(Provider::from_credential("sk-proj-abc"), Provider::OpenAi);
        assert_eq!(Provider::from_credential("anything"), Provider::OpenAi);
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("anthropic".parse::<Provider>().unwrap(), Provider::Anthropic);
        assert!("gemini".parse::<Provider>().is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_client_reports_missing_credential() {
        let client = LlmClient::unconfigured();
        let err = client.generate("prompt", "system").await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
    }

    #[test]
    fn test_from_config_without_key_is_unconfigured() {
        let config = LlmConfig {
            api_key: None,
            provider: Some(Provider::OpenAi),
            model: None,
            openai_base_url: "http://localhost".to_string(),
            anthropic_base_url: "http://localhost".to_string(),
        };
        let client = LlmClient::from_config(&config).unwrap();
        assert!(client.provider().is_none());
    }

    #[test]
    fn test_from_config_dispatches_on_key_shape() {
        let config = LlmConfig {
            api_key: Some("sk-ant-api03-xyz".to_string()),
            provider: None,
            model: None,
            openai_base_url: "http://localhost".to_string(),
            anthropic_base_url: "http://localhost".to_string(),
        };
        let client = LlmClient::from_config(&config).unwrap();
        assert_eq!(client.provider(), Some(Provider::Anthropic));
        assert_eq!(client.model(), Some("claude-sonnet-4-5"));
    }

    #[tokio::test]
    async fn test_whitespace_response_is_empty_error() {
        let client = LlmClient::with_generator(ScriptedGenerator::replying("  \n "));
        let err = client.generate("prompt", "system").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_cached_second_call_skips_backend() {
        let generator = ScriptedGenerator::replying("Tailored resume");
        let client = LlmClient::with_generator(generator.clone());
        let mut cache = ResponseCache::new();

        let first = client
            .generate_cached(&mut cache, CallKind::ResumeGeneration, "p", "s", true)
            .await
            .unwrap();
        let second = client
            .generate_cached(&mut cache, CallKind::ResumeGeneration, "p", "s", true)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_cached_separates_kinds() {
        let generator = ScriptedGenerator::replying("text");
        let client = LlmClient::with_generator(generator.clone());
        let mut cache = ResponseCache::new();

        client
            .generate_cached(&mut cache, CallKind::JobSummary, "same", "s", true)
            .await
            .unwrap();
        client
            .generate_cached(&mut cache, CallKind::ResumeGeneration, "same", "s", true)
            .await
            .unwrap();

        assert_eq!(generator.calls(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_generate_cached_disabled_bypasses_cache() {
        let generator = ScriptedGenerator::replying("text");
        let client = LlmClient::with_generator(generator.clone());
        let mut cache = ResponseCache::new();

        for _ in 0..2 {
            client
                .generate_cached(&mut cache, CallKind::JobSummary, "p", "s", false)
                .await
                .unwrap();
        }

        assert_eq!(generator.calls(), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 0);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let generator = ScriptedGenerator::failing(500);
        let client = LlmClient::with_generator(generator.clone());
        let mut cache = ResponseCache::new();

        for _ in 0..2 {
            let err = client
                .generate_cached(&mut cache, CallKind::JobSummary, "p", "s", true)
                .await
                .unwrap_err();
            assert!(matches!(err, GenerationError::Api { status: 500, .. }));
        }

        assert_eq!(generator.calls(), 2);
        assert!(cache.is_empty());
    }
}

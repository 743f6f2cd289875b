use anyhow::{bail, Context, Result};

use crate::llm_client::Provider;

/// Hard bounds for the per-batch link cap.
pub const MIN_JOB_LINKS: usize = 1;
pub const MAX_JOB_LINKS: usize = 50;
/// Body limit for HTML uploads, in megabytes.
const DEFAULT_UPLOAD_LIMIT_MB: usize = 200;

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; a missing API key is reported per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub cache_enabled: bool,
    pub max_job_links: usize,
    pub batch_delay_ms: u64,
    pub fetch_timeout_secs: u64,
    pub upload_limit_mb: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Backend selection and credentials for the text generator.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub openai_base_url: String,
    pub anthropic_base_url: String,
}

impl LlmConfig {
    /// The provider in effect: explicit choice first, then the credential shape.
    pub fn resolved_provider(&self) -> Option<Provider> {
        self.provider
            .or_else(|| self.api_key.as_deref().map(Provider::from_credential))
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = match optional_env("LLM_PROVIDER") {
            Some(raw) => Some(
                raw.parse::<Provider>()
                    .with_context(|| format!("LLM_PROVIDER has invalid value '{raw}'"))?,
            ),
            None => None,
        };

        let max_job_links = parse_env("MAX_JOB_LINKS", 10usize)?;
        if !(MIN_JOB_LINKS..=MAX_JOB_LINKS).contains(&max_job_links) {
            bail!("MAX_JOB_LINKS must be between {MIN_JOB_LINKS} and {MAX_JOB_LINKS}");
        }

        Ok(Config {
            llm: LlmConfig {
                api_key: optional_env("LLM_API_KEY")
                    .or_else(|| optional_env("OPENAI_API_KEY"))
                    .or_else(|| optional_env("ANTHROPIC_API_KEY")),
                provider,
                model: optional_env("LLM_MODEL"),
                openai_base_url: optional_env("OPENAI_BASE_URL")
                    .unwrap_or_else(|| "https://api.openai.com".to_string()),
                anthropic_base_url: optional_env("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|| "https://api.anthropic.com".to_string()),
            },
            cache_enabled: parse_bool_env("CACHE_ENABLED", true)?,
            max_job_links,
            batch_delay_ms: parse_env("BATCH_DELAY_MS", 1500u64)?,
            fetch_timeout_secs: parse_env("FETCH_TIMEOUT_SECS", 30u64)?,
            upload_limit_mb: parse_env("UPLOAD_LIMIT_MB", DEFAULT_UPLOAD_LIMIT_MB)?,
            port: parse_env("PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Applies a per-request cap, keeping it inside the configured range.
    pub fn link_cap(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.max_job_links)
            .clamp(MIN_JOB_LINKS, MAX_JOB_LINKS)
    }

    pub fn upload_limit_bytes(&self) -> usize {
        self.upload_limit_mb.saturating_mul(1024 * 1024)
    }
}

/// Accepts `1/0`, `true/false`, `yes/no`, `on/off` in any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_bool_env(key: &str, default: bool) -> Result<bool> {
    match optional_env(key) {
        None => Ok(default),
        Some(v) => match parse_bool(&v) {
            Some(flag) => Ok(flag),
            None => bail!("Environment variable '{key}' must be a boolean, got '{v}'"),
        },
    }
}

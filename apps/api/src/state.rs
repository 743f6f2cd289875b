use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::jobs::fetch::PageFetcher;
use crate::llm_client::LlmClient;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable page source. Default: HttpPageFetcher.
    pub fetcher: Arc<dyn PageFetcher>,
    pub config: Config,
    /// Held for the whole of each user action, so actions never interleave.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(llm: LlmClient, fetcher: Arc<dyn PageFetcher>, config: Config) -> Self {
        Self {
            llm,
            fetcher,
            config,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Per-request cache toggle, defaulting to the configured value.
    pub fn use_cache(&self, requested: Option<bool>) -> bool {
        requested.unwrap_or(self.config.cache_enabled)
    }
}

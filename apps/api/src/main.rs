mod cache;
mod config;
mod errors;
mod generation;
mod history;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::fetch::HttpPageFetcher;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::from_config(&config.llm)?;
    if llm.provider().is_none() {
        warn!("No LLM API key configured; extraction degrades and generation returns 503");
    }

    // Initialize page fetcher
    let fetcher = Arc::new(HttpPageFetcher::new(config.fetch_timeout_secs)?);
    info!(
        "Page fetcher initialized (timeout {}s, batch cap {}, delay {}ms, cache {})",
        config.fetch_timeout_secs,
        config.max_job_links,
        config.batch_delay_ms,
        if config.cache_enabled { "on" } else { "off" }
    );

    // Build app state
    let state = AppState::new(llm, fetcher, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the language-model backend in use.
/// `provider` is null when no API key was configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "tailor-api",
        "llm": {
            "provider": state.llm.provider().map(|p| p.as_str()),
            "model": state.llm.model(),
        }
    }))
}

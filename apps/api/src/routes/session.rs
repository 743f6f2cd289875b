//! Session-level routes: document history, downloads, metrics and resets.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::GeneratedDocument;
use crate::session::SessionMetrics;
use crate::state::AppState;

/// GET /api/v1/history
///
/// Documents generated so far, oldest first.
pub async fn handle_history(State(state): State<AppState>) -> Json<Vec<GeneratedDocument>> {
    let session = state.session.lock().await;
    Json(session.history.list().to_vec())
}

/// GET /api/v1/history/:id/download
///
/// The document body as a markdown attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session.lock().await;
    let document = session
        .history
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/markdown; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.download_filename()),
        ),
    ];

    Ok((headers, document.body_text.clone()))
}

/// GET /api/v1/session/metrics
pub async fn handle_metrics(State(state): State<AppState>) -> Json<SessionMetrics> {
    let session = state.session.lock().await;
    Json(session.metrics())
}

/// DELETE /api/v1/cache
pub async fn handle_clear_cache(State(state): State<AppState>) -> Json<Value> {
    let mut session = state.session.lock().await;
    let removed = session.cache.len();
    session.cache.clear();
    info!("Response cache cleared ({removed} entries)");
    Json(json!({ "cleared": removed }))
}

/// POST /api/v1/session/reset
///
/// Drops the cache, the history and every extracted job.
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    let mut session = state.session.lock().await;
    session.reset();
    info!("Session reset");
    StatusCode::NO_CONTENT
}

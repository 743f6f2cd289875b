pub mod health;
pub mod session;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::generation::handlers as documents;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.upload_limit_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route(
            "/api/v1/jobs/upload",
            post(jobs::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/jobs/batch", post(jobs::handle_batch))
        .route("/api/v1/jobs/extract", post(jobs::handle_extract))
        // Documents API
        .route(
            "/api/v1/documents/resume",
            post(documents::handle_generate_resume),
        )
        .route(
            "/api/v1/documents/email",
            post(documents::handle_generate_email),
        )
        // Session
        .route("/api/v1/history", get(session::handle_history))
        .route(
            "/api/v1/history/:id/download",
            get(session::handle_download),
        )
        .route("/api/v1/session/metrics", get(session::handle_metrics))
        .route("/api/v1/session/reset", post(session::handle_reset))
        .route("/api/v1/cache", delete(session::handle_clear_cache))
        .with_state(state)
}

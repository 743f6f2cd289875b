//! Axum route handlers for the Documents API.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::composer::{compose_email, compose_resume};
use crate::generation::options::{EmailOptions, ResumeOptions};
use crate::models::document::GeneratedDocument;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub job_id: Uuid,
    pub profile: CandidateProfile,
    #[serde(default)]
    pub options: ResumeOptions,
    pub use_cache: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub job_id: Uuid,
    pub profile: CandidateProfile,
    #[serde(default)]
    pub options: EmailOptions,
    pub use_cache: Option<bool>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/resume
///
/// Generates a tailored resume for a job record held in the session.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let use_cache = state.use_cache(request.use_cache);
    let mut session = state.session.lock().await;
    let job = session
        .job(request.job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let document = compose_resume(
        &mut session,
        &state.llm,
        &job,
        &request.profile,
        &request.options,
        use_cache,
    )
    .await?;

    Ok(Json(document))
}

/// POST /api/v1/documents/email
///
/// Generates a cold outreach email, addressed to the hiring contact when the
/// posting names one.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let use_cache = state.use_cache(request.use_cache);
    let mut session = state.session.lock().await;
    let job = session
        .job(request.job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let document = compose_email(
        &mut session,
        &state.llm,
        &job,
        &request.profile,
        &request.options,
        use_cache,
    )
    .await?;

    Ok(Json(document))
}

//! Axum route handlers for the Jobs API.

use std::time::Duration;

use axum::{
    extract::{
        multipart::{Field, MultipartError},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::parse_bool;
use crate::errors::AppError;
use crate::jobs::batch::{process_links, BatchOptions};
use crate::jobs::extractor::extract_job;
use crate::jobs::links::{dedupe_links, extract_job_links, normalize_job_link, validate_job_url};
use crate::models::job::JobRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub links: Vec<String>,
    pub max_links: Option<usize>,
    pub use_cache: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    pub use_cache: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub links_found: usize,
    pub links_processed: usize,
    /// Inputs that were not recognisable job links.
    pub rejected: Vec<String>,
    pub jobs: Vec<JobRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/upload
///
/// Multipart form: `file` (HTML), optional `max_links` and `use_cache`.
/// Body size is capped by `UPLOAD_LIMIT_MB` on the route.
/// Scans the document for job links and extracts each one.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchResponse>, AppError> {
    let mut html: Option<String> = None;
    let mut max_links: Option<usize> = None;
    let mut use_cache: Option<bool> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Invalid multipart body"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Failed to read upload"))?;
                html = Some(String::from_utf8_lossy(&data).into_owned());
            }
            "max_links" => {
                let text = field_text(field, "max_links").await?;
                max_links = Some(text.trim().parse().map_err(|_| {
                    AppError::Validation(format!("max_links must be a number, got '{text}'"))
                })?);
            }
            "use_cache" => {
                let text = field_text(field, "use_cache").await?;
                use_cache = Some(parse_bool(&text).ok_or_else(|| {
                    AppError::Validation(format!("use_cache must be a boolean, got '{text}'"))
                })?);
            }
            _ => {}
        }
    }

    let html = html.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    let links = extract_job_links(&html);
    if links.is_empty() {
        return Err(AppError::Validation(
            "No valid LinkedIn job links found in the uploaded HTML.".to_string(),
        ));
    }

    run_batch(&state, links, Vec::new(), max_links, use_cache).await
}

/// POST /api/v1/jobs/batch
///
/// Same as upload, for clients that already hold the links.
pub async fn handle_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let mut links = Vec::new();
    let mut rejected = Vec::new();
    for raw in request.links {
        match normalize_job_link(&raw) {
            Some(link) => links.push(link),
            None => rejected.push(raw),
        }
    }

    if links.is_empty() {
        return Err(AppError::Validation(
            "No valid LinkedIn job links in request.".to_string(),
        ));
    }
    let links = dedupe_links(&links);

    run_batch(&state, links, rejected, request.max_links, request.use_cache).await
}

/// POST /api/v1/jobs/extract
///
/// Extracts a single posting. Fetch and AI failures still yield a (degraded) record.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<JobRecord>, AppError> {
    let link = validate_job_url(&request.url)?;
    let use_cache = state.use_cache(request.use_cache);

    let mut session = state.session.lock().await;
    let record = extract_job(
        1,
        &link,
        state.fetcher.as_ref(),
        &state.llm,
        &mut session.cache,
        use_cache,
    )
    .await;
    session.remember_jobs(std::slice::from_ref(&record));

    Ok(Json(record))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobRecord>> {
    let session = state.session.lock().await;
    Json(session.jobs().to_vec())
}

async fn field_text(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| multipart_error(e, &format!("Failed to read '{name}'")))
}

/// Over-limit bodies surface as 413; every other multipart failure is the client's input.
fn multipart_error(e: MultipartError, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", e.body_text()))
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

async fn run_batch(
    state: &AppState,
    links: Vec<String>,
    rejected: Vec<String>,
    max_links: Option<usize>,
    use_cache: Option<bool>,
) -> Result<Json<BatchResponse>, AppError> {
    let options = BatchOptions {
        max_links: state.config.link_cap(max_links),
        delay: Duration::from_millis(state.config.batch_delay_ms),
        use_cache: state.use_cache(use_cache),
    };

    let mut session = state.session.lock().await;
    let jobs = process_links(
        &links,
        options,
        state.fetcher.as_ref(),
        &state.llm,
        &mut session.cache,
    )
    .await;
    session.remember_jobs(&jobs);

    Ok(Json(BatchResponse {
        links_found: links.len(),
        links_processed: jobs.len(),
        rejected,
        jobs,
    }))
}

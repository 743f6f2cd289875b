//! Document composition: builds resume and cold-email prompts from a job
//! record, a candidate profile and customization options, then runs one
//! cached LLM call per document.
//!
//! Flow (email): extract_hr_contact (cached, `hr_extraction`) →
//!               build_email_prompt → LLM (cached, `email_generation`) → history.
//! Flow (resume): build_resume_prompt → LLM (cached, `resume_generation`) → history.
//!
//! Each successful composition appends to the session history, including
//! repeated identical requests.

use serde::Serialize;
use tracing::info;

use crate::cache::{CallKind, ResponseCache};
use crate::errors::AppError;
use crate::generation::options::{EmailOptions, ResumeOptions};
use crate::generation::prompts::{
    EMAIL_PROMPT_TEMPLATE, EMAIL_SYSTEM, HR_EXTRACTION_PROMPT_TEMPLATE, HR_EXTRACTION_SYSTEM,
    RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM,
};
use crate::jobs::extractor::{labelled_value, meaningful, truncate_chars, EXTRACTION_TEXT_LIMIT};
use crate::llm_client::prompts::{render_template, FACTUALITY_INSTRUCTION, LABELLED_LINES_INSTRUCTION};
use crate::llm_client::{GenerationError, LlmClient};
use crate::models::document::{DocumentKind, GeneratedDocument};
use crate::models::job::JobRecord;
use crate::models::profile::CandidateProfile;
use crate::session::Session;

/// Characters of page text searched for a hiring contact.
pub const HR_TEXT_LIMIT: usize = 4000;
/// Salutation used when no contact could be recovered.
const DEFAULT_RECIPIENT: &str = "Hiring Manager";
const NO_DESCRIPTION: &str = "(No job description could be extracted; rely on the title and company.)";

/// Recruiter or hiring manager named in a posting. Fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HrContact {
    pub name: String,
    pub title: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

/// Parsed description when present, else the leading page text.
fn job_description_for_prompt(job: &JobRecord) -> &str {
    if !job.description.trim().is_empty() {
        &job.description
    } else if !job.raw_text.trim().is_empty() {
        truncate_chars(&job.raw_text, EXTRACTION_TEXT_LIMIT)
    } else {
        NO_DESCRIPTION
    }
}

pub fn build_resume_prompt(
    job: &JobRecord,
    profile: &CandidateProfile,
    options: &ResumeOptions,
) -> String {
    let focus = options.focus_instruction();
    let profile_block = profile.to_prompt_block();
    render_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("style", options.style.instruction()),
            ("length", options.length.instruction()),
            ("focus", focus.as_str()),
            ("keywords", options.keyword_instruction()),
            ("factuality_instruction", FACTUALITY_INSTRUCTION),
            ("job_title", job.title.as_str()),
            ("company", job.company.as_str()),
            ("location", job.location.as_str()),
            ("job_description", job_description_for_prompt(job)),
            ("profile", profile_block.as_str()),
        ],
    )
}

pub fn build_hr_prompt(raw_text: &str) -> String {
    render_template(
        HR_EXTRACTION_PROMPT_TEMPLATE,
        &[
            ("labelled_lines_instruction", LABELLED_LINES_INSTRUCTION),
            ("page_text", truncate_chars(raw_text, HR_TEXT_LIMIT)),
        ],
    )
}

pub fn parse_hr_contact(reply: &str) -> HrContact {
    let mut contact = HrContact::default();
    for line in reply.lines() {
        if contact.name.is_empty() {
            if let Some(name) = labelled_value(line, "hr name:").and_then(meaningful) {
                contact.name = name;
                continue;
            }
        }
        if contact.title.is_empty() {
            if let Some(title) = labelled_value(line, "hr title:").and_then(meaningful) {
                contact.title = title;
            }
        }
    }
    contact
}

pub fn build_email_prompt(
    job: &JobRecord,
    profile: &CandidateProfile,
    options: &EmailOptions,
    contact: &HrContact,
) -> String {
    let recipient = if contact.name.is_empty() {
        DEFAULT_RECIPIENT
    } else {
        contact.name.as_str()
    };
    let recipient_title = if contact.title.is_empty() {
        String::new()
    } else {
        format!(" ({})", contact.title)
    };

    let closing = options.closing_instructions();
    let profile_block = profile.to_prompt_block();
    render_template(
        EMAIL_PROMPT_TEMPLATE,
        &[
            ("tone", options.tone.instruction()),
            ("length", options.length.instruction()),
            ("closing", closing.as_str()),
            ("factuality_instruction", FACTUALITY_INSTRUCTION),
            ("recipient", recipient),
            ("recipient_title", recipient_title.as_str()),
            ("job_title", job.title.as_str()),
            ("company", job.company.as_str()),
            ("job_description", job_description_for_prompt(job)),
            ("profile", profile_block.as_str()),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

fn validate_profile(profile: &CandidateProfile) -> Result<(), AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("profile.name cannot be empty".to_string()));
    }
    Ok(())
}

/// Recovers the hiring contact from the page text. Skips the call when the
/// record has no page text.
pub async fn extract_hr_contact(
    llm: &LlmClient,
    cache: &mut ResponseCache,
    job: &JobRecord,
    use_cache: bool,
) -> Result<HrContact, GenerationError> {
    if job.raw_text.trim().is_empty() {
        return Ok(HrContact::default());
    }
    let prompt = build_hr_prompt(&job.raw_text);
    let reply = llm
        .generate_cached(cache, CallKind::HrExtraction, &prompt, HR_EXTRACTION_SYSTEM, use_cache)
        .await?;
    Ok(parse_hr_contact(&reply))
}

pub async fn compose_resume(
    session: &mut Session,
    llm: &LlmClient,
    job: &JobRecord,
    profile: &CandidateProfile,
    options: &ResumeOptions,
    use_cache: bool,
) -> Result<GeneratedDocument, AppError> {
    validate_profile(profile)?;

    info!("Composing resume for {} → {}", profile.name, job.display_label());
    let prompt = build_resume_prompt(job, profile, options);
    let body = llm
        .generate_cached(
            &mut session.cache,
            CallKind::ResumeGeneration,
            &prompt,
            RESUME_SYSTEM,
            use_cache,
        )
        .await?;

    let document = GeneratedDocument::new(
        DocumentKind::Resume,
        &profile.name,
        &job.title,
        &job.company,
        body,
    );
    session.history.append(document.clone());
    Ok(document)
}

pub async fn compose_email(
    session: &mut Session,
    llm: &LlmClient,
    job: &JobRecord,
    profile: &CandidateProfile,
    options: &EmailOptions,
    use_cache: bool,
) -> Result<GeneratedDocument, AppError> {
    validate_profile(profile)?;

    let contact = extract_hr_contact(llm, &mut session.cache, job, use_cache).await?;
    info!(
        "Composing email for {} → {} (recipient: {})",
        profile.name,
        job.display_label(),
        if contact.name.is_empty() { DEFAULT_RECIPIENT } else { contact.name.as_str() }
    );

    let prompt = build_email_prompt(job, profile, options, &contact);
    let body = llm
        .generate_cached(
            &mut session.cache,
            CallKind::EmailGeneration,
            &prompt,
            EMAIL_SYSTEM,
            use_cache,
        )
        .await?;

    let document = GeneratedDocument::new(
        DocumentKind::Email,
        &profile.name,
        &job.title,
        &job.company,
        body,
    );
    session.history.append(document.clone());
    Ok(document)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

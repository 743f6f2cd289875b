//! Job extraction: page text -> cached LLM call -> tolerant line-prefix parse.
//!
//! Parsing never fails. Missing or placeholder fields fall back to defaults:
//! title `Job {n}`, company `Unknown`, everything else empty.

use tracing::{info, warn};

use crate::cache::{CallKind, ResponseCache};
use crate::jobs::fetch::PageFetcher;
use crate::jobs::prompts::{JOB_EXTRACTION_PROMPT_TEMPLATE, JOB_EXTRACTION_SYSTEM};
use crate::llm_client::prompts::{render_template, LABELLED_LINES_INSTRUCTION};
use crate::llm_client::{GenerationError, LlmClient};
use crate::models::job::{fallback_title, JobRecord, UNKNOWN_COMPANY};

/// Characters of page text sent for extraction; bounds prompt size.
pub const EXTRACTION_TEXT_LIMIT: usize = 8000;

const TITLE_LABEL: &str = "job title:";
const COMPANY_LABEL: &str = "company:";
const LOCATION_LABEL: &str = "location:";
const EMPLOYMENT_TYPE_LABEL: &str = "employment type:";
const DESCRIPTION_LABEL: &str = "job description:";

/// Values models emit when they could not find a field.
const PLACEHOLDER_VALUES: [&str; 7] = [
    "unknown",
    "n/a",
    "na",
    "none",
    "not found",
    "not specified",
    "not available",
];

/// Fields recovered from an extraction reply; `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedJobFields {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
}

/// Leading prefix of `text` of at most `limit` characters, on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_extraction_prompt(page_text: &str) -> String {
    render_template(
        JOB_EXTRACTION_PROMPT_TEMPLATE,
        &[
            ("labelled_lines_instruction", LABELLED_LINES_INSTRUCTION),
            ("page_text", truncate_chars(page_text, EXTRACTION_TEXT_LIMIT)),
        ],
    )
}

/// Scans reply lines for the labelled fields. First match wins; scanning
/// stops at `Job Description:`, whose inline value and every following line
/// become the description.
pub fn parse_job_summary(reply: &str) -> ParsedJobFields {
    let mut fields = ParsedJobFields::default();
    let lines: Vec<&str> = reply.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        if let Some(inline) = labelled_value(line, DESCRIPTION_LABEL) {
            let mut parts = vec![inline];
            parts.extend(lines[idx + 1..].iter().copied());
            fields.description = meaningful(parts.join("\n").trim());
            break;
        }

        for (label, slot) in [
            (TITLE_LABEL, &mut fields.title),
            (COMPANY_LABEL, &mut fields.company),
            (LOCATION_LABEL, &mut fields.location),
            (EMPLOYMENT_TYPE_LABEL, &mut fields.employment_type),
        ] {
            if slot.is_none() {
                if let Some(value) = labelled_value(line, label) {
                    *slot = meaningful(value);
                }
            }
        }
    }

    fields
}

/// Value after `label` (lower-case, with colon) when the line starts with it,
/// ignoring case and leading markdown decoration.
pub(crate) fn labelled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let line = line.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '-' | '#' | '_'));
    let head = line.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    Some(line[label.len()..].trim_matches(|c: char| c.is_whitespace() || c == '*'))
}

/// `None` for empty or placeholder values.
pub(crate) fn meaningful(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || PLACEHOLDER_VALUES.contains(&value.to_ascii_lowercase().as_str()) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extracts one record from already-fetched page text.
pub async fn summarize_page(
    index: usize,
    source_link: &str,
    raw_text: String,
    llm: &LlmClient,
    cache: &mut ResponseCache,
    use_cache: bool,
) -> Result<JobRecord, GenerationError> {
    let prompt = build_extraction_prompt(&raw_text);
    let reply = llm
        .generate_cached(cache, CallKind::JobSummary, &prompt, JOB_EXTRACTION_SYSTEM, use_cache)
        .await?;
    let fields = parse_job_summary(&reply);

    Ok(JobRecord {
        id: uuid::Uuid::new_v4(),
        index,
        title: fields.title.unwrap_or_else(|| fallback_title(index)),
        company: fields.company.unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        location: fields.location.unwrap_or_default(),
        employment_type: fields.employment_type.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        raw_text,
        source_link: source_link.to_string(),
        degraded_reason: None,
    })
}

/// Fetches and extracts one job. Never fails: a failed fetch or AI call
/// yields a degraded record so batches keep going.
pub async fn extract_job(
    index: usize,
    source_link: &str,
    fetcher: &dyn PageFetcher,
    llm: &LlmClient,
    cache: &mut ResponseCache,
    use_cache: bool,
) -> JobRecord {
    let raw_text = match fetcher.fetch_text(source_link).await {
        Ok(text) if text.trim().is_empty() => {
            warn!("Job {index}: page at {source_link} had no readable text");
            return JobRecord::degraded(index, source_link, "page had no readable text");
        }
        Ok(text) => text,
        Err(e) => {
            warn!("Job {index}: fetch failed for {source_link}: {e}");
            return JobRecord::degraded(index, source_link, format!("fetch failed: {e}"));
        }
    };

    match summarize_page(index, source_link, raw_text.clone(), llm, cache, use_cache).await {
        Ok(record) => {
            info!("Job {index}: extracted \"{}\"", record.display_label());
            record
        }
        Err(e) => {
            warn!("Job {index}: extraction failed for {source_link}: {e}");
            JobRecord {
                raw_text,
                ..JobRecord::degraded(index, source_link, format!("extraction failed: {e}"))
            }
        }
    }
}

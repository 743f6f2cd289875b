//! Job-link scanning: finds LinkedIn job-view links in an HTML document and
//! rewrites each to `https://www.linkedin.com/jobs/view/<id>`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};
use thiserror::Error;

/// Substring every accepted job URL must contain.
pub const JOB_PATH_MARKER: &str = "linkedin.com/jobs/view";
const CANONICAL_PREFIX: &str = "https://www.linkedin.com/jobs/view/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Not a LinkedIn job posting URL: {0}")]
    NotJobLink(String),

    #[error("No job id found in URL: {0}")]
    MissingJobId(String),
}

/// Matches `/jobs/view/<id>` and slug paths ending in `-<id>`; the id must end the segment.
fn job_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"linkedin\.com/jobs/view/(?:[^/?#]*-)?(\d+)(?:[/?#]|$)")
            .expect("job link pattern is valid")
    })
}

/// Canonical form of a job link, or `None` when no job id is present.
pub fn normalize_job_link(url: &str) -> Option<String> {
    job_id_pattern()
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{CANONICAL_PREFIX}{}", id.as_str()))
}

/// Validates a single user-supplied URL and returns its canonical form.
pub fn validate_job_url(url: &str) -> Result<String, LinkError> {
    let url = url.trim();
    if !url.contains(JOB_PATH_MARKER) {
        return Err(LinkError::NotJobLink(url.to_string()));
    }
    normalize_job_link(url).ok_or_else(|| LinkError::MissingJobId(url.to_string()))
}

/// All distinct job links in `html`, canonicalised, in document order.
pub fn extract_job_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("anchor selector is valid");

    let mut seen = HashSet::new();
    document
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains(JOB_PATH_MARKER))
        .filter_map(normalize_job_link)
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

/// Order-preserving de-duplication of already canonical links.
pub fn dedupe_links<'a, I>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.as_str()))
        .cloned()
        .collect()
}

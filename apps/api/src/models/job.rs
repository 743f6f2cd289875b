use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Company placeholder when extraction cannot recover one.
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Structured view of one job posting. Never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: Uuid,
    /// 1-based position in the batch that produced it; drives the fallback title.
    pub index: usize,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub raw_text: String,
    pub source_link: String,
    /// Set when the record carries placeholders because a fetch or AI call failed.
    pub degraded_reason: Option<String>,
}

impl JobRecord {
    /// Placeholder record for a posting whose page could not be fetched.
    pub fn degraded(index: usize, source_link: &str, reason: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            index,
            title: fallback_title(index),
            company: UNKNOWN_COMPANY.to_string(),
            location: String::new(),
            employment_type: String::new(),
            description: String::new(),
            raw_text: String::new(),
            source_link: source_link.to_string(),
            degraded_reason: Some(reason.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded_reason.is_some()
    }

    /// "Backend Engineer at Acme", the label shown when picking a job.
    pub fn display_label(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}

pub fn fallback_title(index: usize) -> String {
    format!("Job {index}")
}

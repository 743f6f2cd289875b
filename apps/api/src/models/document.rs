use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    Email,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::Email => "email",
        }
    }
}

/// A generated resume or email as kept in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub candidate_name: String,
    pub job_title: String,
    pub company: String,
    pub body_text: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedDocument {
    pub fn new(
        kind: DocumentKind,
        candidate_name: &str,
        job_title: &str,
        company: &str,
        body_text: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            candidate_name: candidate_name.to_string(),
            job_title: job_title.to_string(),
            company: company.to_string(),
            body_text,
            created_at: Utc::now(),
        }
    }

    /// `jane_doe_acme_corp_resume.md`
    pub fn download_filename(&self) -> String {
        format!(
            "{}_{}_{}.md",
            filename_slug(&self.candidate_name),
            filename_slug(&self.company),
            self.kind.as_str()
        )
    }
}

/// Collapses whitespace runs to `_`, lower-cases, and drops every character
/// outside `[a-z0-9._-]` so the result is safe inside a quoted header value.
pub fn filename_slug(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

use serde::{Deserialize, Serialize};

/// Candidate details supplied with each document request. Not persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// LinkedIn, GitHub, portfolio; free text.
    pub links: String,
    pub summary: String,
    /// Comma-separated.
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl CandidateProfile {
    /// Renders the labelled block interpolated into generation prompts.
    pub fn to_prompt_block(&self) -> String {
        [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Location", &self.location),
            ("Links", &self.links),
            ("Summary", &self.summary),
            ("Skills", &self.skills),
            ("Experience", &self.experience),
            ("Education", &self.education),
        ]
        .iter()
        .map(|(label, value)| format!("{label}: {}", value.trim()))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

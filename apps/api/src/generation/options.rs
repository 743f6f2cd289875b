//! Customization options for generated documents, each rendered as a prompt instruction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStyle {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeLength {
    #[default]
    OnePage,
    TwoPages,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    TechnicalSkills,
    Leadership,
    ProjectImpact,
    Certifications,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeOptions {
    pub style: ResumeStyle,
    pub length: ResumeLength,
    pub focus_areas: Vec<FocusArea>,
    pub optimize_keywords: bool,
}

impl Default for ResumeOptions {
    fn default() -> Self {
        Self {
            style: ResumeStyle::default(),
            length: ResumeLength::default(),
            focus_areas: Vec::new(),
            optimize_keywords: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTone {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
    Formal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailLength {
    Short,
    #[default]
    Medium,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    pub tone: EmailTone,
    pub length: EmailLength,
    pub mention_attachment: bool,
    pub request_meeting: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            tone: EmailTone::default(),
            length: EmailLength::default(),
            mention_attachment: true,
            request_meeting: true,
        }
    }
}

impl ResumeStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            ResumeStyle::Modern => "Modern: clean headers, concise bullet points, a short skills matrix.",
            ResumeStyle::Classic => "Classic: traditional reverse-chronological layout with formal section names.",
            ResumeStyle::Minimal => "Minimal: sparse formatting, no decorative elements, only essential sections.",
            ResumeStyle::Creative => "Creative: distinctive section titles and a headline that shows personality, still ATS-readable.",
        }
    }
}

impl ResumeLength {
    pub fn instruction(&self) -> &'static str {
        match self {
            ResumeLength::OnePage => "Fit on one page: at most 3-4 bullets per role.",
            ResumeLength::TwoPages => "Up to two pages: 4-6 bullets per role.",
            ResumeLength::Detailed => "Detailed: cover every relevant role and project in depth.",
        }
    }
}

impl FocusArea {
    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::TechnicalSkills => "technical skills",
            FocusArea::Leadership => "leadership",
            FocusArea::ProjectImpact => "project impact",
            FocusArea::Certifications => "certifications",
            FocusArea::Education => "education",
        }
    }
}

impl ResumeOptions {
    pub fn focus_instruction(&self) -> String {
        if self.focus_areas.is_empty() {
            return "Balance all sections evenly.".to_string();
        }
        let labels: Vec<_> = self.focus_areas.iter().map(|f| f.label()).collect();
        format!("Emphasise: {}.", labels.join(", "))
    }

    pub fn keyword_instruction(&self) -> &'static str {
        if self.optimize_keywords {
            "Mirror the job description's key terms where the profile supports them, for ATS matching."
        } else {
            "Do not add keywords purely for ATS matching."
        }
    }
}

impl EmailTone {
    pub fn instruction(&self) -> &'static str {
        match self {
            EmailTone::Professional => "professional and confident",
            EmailTone::Friendly => "warm and friendly, still professional",
            EmailTone::Enthusiastic => "enthusiastic and energetic",
            EmailTone::Formal => "formal and respectful",
        }
    }
}

impl EmailLength {
    pub fn instruction(&self) -> &'static str {
        match self {
            EmailLength::Short => "under 120 words",
            EmailLength::Medium => "150 to 200 words",
            EmailLength::Long => "250 to 300 words",
        }
    }
}

impl EmailOptions {
    pub fn closing_instructions(&self) -> String {
        let attachment = if self.mention_attachment {
            "Mention that the resume is attached."
        } else {
            "Do not mention any attachment."
        };
        let meeting = if self.request_meeting {
            "Close by asking for a short call or meeting."
        } else {
            "Close politely without requesting a meeting."
        };
        format!("{attachment} {meeting}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_options_default_from_empty_json() {
        let options: ResumeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ResumeOptions::default());
        assert!(options.optimize_keywords);
    }

    #[test]
    fn test_resume_options_parse_snake_case() {
        let options: ResumeOptions = serde_json::from_str(
            r#"{"style": "classic", "length": "two_pages", "focus_areas": ["leadership", "project_impact"]}"#,
        )
        .unwrap();
        assert_eq!(options.style, ResumeStyle::Classic);
        assert_eq!(options.length, ResumeLength::TwoPages);
        assert_eq!(options.focus_instruction(), "Emphasise: leadership, project impact.");
    }

    #[test]
    fn test_email_options_defaults_request_meeting_and_attachment() {
        let options: EmailOptions = serde_json::from_str(r#"{"tone": "friendly"}"#).unwrap();
        assert_eq!(options.tone, EmailTone::Friendly);
        assert_eq!(options.length, EmailLength::Medium);
        assert!(options.closing_instructions().contains("resume is attached"));
        assert!(options.closing_instructions().contains("call or meeting"));
    }

    #[test]
    fn test_email_closing_without_toggles() {
        let options = EmailOptions {
            mention_attachment: false,
            request_meeting: false,
            ..Default::default()
        };
        assert_eq!(
            options.closing_instructions(),
            "Do not mention any attachment. Close politely without requesting a meeting."
        );
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(serde_json::from_str::<ResumeOptions>(r#"{"style": "baroque"}"#).is_err());
    }
}

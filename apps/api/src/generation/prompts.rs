// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

pub const RESUME_SYSTEM: &str = "You are a professional resume writer who tailors \
    resumes to specific job descriptions. You write in clean markdown.";

/// Resume generation prompt template.
/// Replace: {profile}, {job_title}, {company}, {location}, {job_description},
///          {style}, {length}, {focus}, {keywords}, {factuality_instruction}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a tailored resume in markdown format using the candidate's profile and the job description below.

Candidate Profile:
{profile}

Job Title: {job_title}
Company: {company}
Location: {location}

Job Description:
{job_description}

FORMAT:
- Style: {style}
- Length: {length}
- Focus: {focus}
- Keywords: {keywords}

{factuality_instruction}

Make the resume focused, polished, and aligned with the job role. Format it cleanly with headers."#;

pub const HR_EXTRACTION_SYSTEM: &str =
    "You extract hiring-contact details from job postings.";

/// Replace: {labelled_lines_instruction}, {page_text}
pub const HR_EXTRACTION_PROMPT_TEMPLATE: &str = r#"From the job posting text below, identify the recruiter, hiring manager, or job poster, if one is named.

Format your response as:
HR Name: <full name>
HR Title: <job title of that person>

{labelled_lines_instruction}

Text:
{page_text}"#;

pub const EMAIL_SYSTEM: &str = "You are a career coach who writes concise, \
    personalised cold outreach emails to recruiters and hiring managers.";

/// Cold email prompt template.
/// Replace: {recipient}, {recipient_title}, {profile}, {job_title}, {company},
///          {job_description}, {tone}, {length}, {closing}, {factuality_instruction}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"Write a cold outreach email from the candidate to {recipient}{recipient_title} about the role below.

Candidate Profile:
{profile}

Job Title: {job_title}
Company: {company}

Job Description:
{job_description}

REQUIREMENTS:
- Start with a line `Subject: <subject>` followed by a blank line and the email body.
- Tone: {tone}
- Length: {length}
- Connect two or three of the candidate's strongest, relevant qualifications to the role.
- {closing}
- Sign off with the candidate's name and contact details.

{factuality_instruction}"#;

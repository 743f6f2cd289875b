// LLM prompt constants for job extraction.

pub const JOB_EXTRACTION_SYSTEM: &str =
    "You are an assistant that extracts structured job data from LinkedIn job pages.";

/// Replace: {labelled_lines_instruction}, {page_text}
pub const JOB_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Given the following raw text from a LinkedIn job page, extract:
1. Job Title
2. Company Name
3. Location
4. Employment Type (full-time, part-time, contract, internship, ...)
5. Full Job Description

Format your response as:
Job Title: <title>
Company: <company>
Location: <location>
Employment Type: <employment type>
Job Description: <description, may span multiple lines>

{labelled_lines_instruction}
The job description comes last and may continue over as many lines as needed.

Text:
{page_text}"#;

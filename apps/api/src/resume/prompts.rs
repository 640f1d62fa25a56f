// Résumé structuring prompt templates.

pub const RESUME_SYSTEM: &str = "\
You are a precise resume data extractor. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Never invent contact details, employers, dates, or skills that are not in the text.";

/// Replace `{resume_text}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Extract structured data from the following resume.

Return ONLY a valid JSON object.
No explanations, no markdown, no backticks.

The JSON MUST contain these top-level keys:
- user_info: {"name": "", "email": "", "phone": "", "linkedin": ""}
- education: [{"school": "", "degree": "", "graduation_date": ""}]
- experience: [{"company": "", "role": "", "dates": "", "bullets": [""]}]
- skills: ["string"]

Use null for contact fields that are not present. Use empty arrays for
sections the resume does not have. Lines such as "--- Page 2 ---" mark page
boundaries and are not part of the resume.

Resume text:
{resume_text}"#;

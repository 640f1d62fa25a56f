// All prompt constants and search objectives for the Enrichment module.
// Templates use `{name}` placeholders filled with `str::replace` before sending.

// ────────────────────────────────────────────────────────────────────────────
// Search / extract objectives
// ────────────────────────────────────────────────────────────────────────────

pub const JOB_DESCRIPTION_OBJECTIVE: &str = "\
Extract the full job description from a user-submitted job posting URL and convert \
the page's public content into a structured text field. Retrieve the role overview, \
responsibilities, required qualifications, preferred skills, and any additional notes \
provided in the posting.";

pub const LINKEDIN_OBJECTIVE: &str = "\
Extract publicly available information from the provided LinkedIn profile URL: \
name, headline, professional experience, education, technical specialties, \
affiliations, and a concise background summary useful for interview preparation.";

pub const REFERENCES_OBJECTIVE: &str = "\
Find user profiles that have worked at the specified company and held the position \
described. Provide name and LinkedIn profile URL for each user.";

/// Replace `{company}`.
pub const RESEARCH_OBJECTIVE_TEMPLATE: &str = "\
Collect reliable public-web content about {company} that is highly relevant for a software \
engineer preparing for an interview. Focus on interview process (coding, system design, \
behavioral), common LeetCode topics, mission and values. Avoid generic marketing pages, \
job listings, cookie banners or purely benefits-oriented content.";

/// Replace `{company}` in each.
pub const RESEARCH_QUERY_TEMPLATES: [&str; 5] = [
    "{company} mission statement core values engineering culture",
    "{company} software engineer interview process questions",
    "{company} common interview questions software engineer",
    "{company} leetcode company topics {company}",
    "{company} recent technology news announcement",
];

/// Replace `{company}` and `{role}`.
pub const REFERENCES_QUERY_TEMPLATE: &str = "\
find all user profiles that have worked at {company} and hold or held in the past the \
position described in the following job description: {role}.";

// ────────────────────────────────────────────────────────────────────────────
// Generation prompts
// ────────────────────────────────────────────────────────────────────────────

/// Replace `{job_url}`.
pub const COMPANY_NAME_PROMPT_TEMPLATE: &str = "\
Extract the company NAME from this job URL: {job_url}
Reply with the company name only, on a single line, with no punctuation or explanation.";

/// Replace `{job_url}` and `{raw_content}`.
pub const STRUCTURE_JOB_PROMPT_TEMPLATE: &str = r#"Convert the following messy job description text into a well-structured JSON object.
{no_invention}

Return ONLY valid JSON. No explanations.

Expected structure:
{
  "job_info": {
    "title": "",
    "company": "",
    "location": "",
    "employment_type": "",
    "seniority_level": "",
    "department_or_team": "",
    "job_url": "{job_url}"
  },
  "description": {
    "summary": "",
    "responsibilities": [""],
    "requirements": {
      "must_have": [""],
      "nice_to_have": [""]
    },
    "skills": {
      "technical": [""],
      "soft": [""],
      "tools_and_technologies": [""]
    },
    "compensation_and_benefits": {
      "salary_range": "",
      "equity": "",
      "bonus": "",
      "benefits": [""]
    }
  }
}

Raw content:
{raw_content}"#;

/// Replace `{raw_content}`.
pub const STRUCTURE_PROFILE_PROMPT_TEMPLATE: &str = r#"Convert the following LinkedIn-style search output into a well-structured JSON object.
{no_invention}

Return ONLY valid JSON. No explanations.

Expected structure:
{
  "user_info": {
    "name": "",
    "headline": "",
    "location": "",
    "connections": 0,
    "avatar": "",
    "linkedin_url": ""
  },
  "experience": [
    {"title": "", "company": "", "location": "", "start_date": "", "end_date": "", "description": ""}
  ],
  "education": [
    {"school": "", "degree": "", "field": "", "start_year": "", "end_year": "", "description": ""}
  ],
  "organizations": [],
  "languages": [],
  "projects": [],
  "activity": []
}

Raw content:
{raw_content}"#;

/// Replace `{job_description}` and `{user_data}`.
pub const FIT_SCORE_PROMPT_TEMPLATE: &str = r#"You are generating a hiring "Fit Score" analysis.

You will be given:
1. A parsed resume (JSON).
2. A parsed job description (JSON).

Your task:
- Compare the resume and job description realistically.
- DO NOT hallucinate skills, experience, or details not present in the input.
- Provide a numeric score for each category (0-100).
- Provide a short, factual explanation for each score.
- Provide an overall fit score (0-100), based on weighted reasoning.
- Return ONLY valid JSON. No comments, no markdown.

The JSON you MUST return:
{
  "overall_fit_score": 0,
  "categories": {
    "technical_skills_match": {"score": 0, "reason": ""},
    "experience_alignment": {"score": 0, "reason": ""},
    "education_background": {"score": 0, "reason": ""},
    "gpa_and_academics": {"score": 0, "reason": ""},
    "previous_company_experience": {"score": 0, "reason": ""},
    "leadership_and_involvement": {"score": 0, "reason": ""}
  }
}

Scoring guidelines:
- Use only information explicitly found in the resume and job description.
- If a category has insufficient information, score it lower and explain why.
- Scores should be proportional and realistic, not inflated.
- Explanations must be 1-2 sentences max.

Job Description: {job_description}
User Data: {user_data}"#;

/// Replace `{raw_content}`.
pub const STRUCTURE_REFERENCES_PROMPT_TEMPLATE: &str = r#"Convert the following references search output into a well-structured JSON object.
{no_invention}

Return ONLY valid JSON. No explanations.

Go through the input, find and extract name, linkedin_url, and email for each reference.
Only return those fields. No exceptions. Use null for an email that is not present.

Expected structure:
{
  "references": [
    {"name": "", "linkedin_url": "", "email": ""}
  ]
}

Raw content:
{raw_content}"#;

/// Replace `{raw_content}`. The only structuring step allowed to backfill.
pub const STRUCTURE_RESEARCH_PROMPT_TEMPLATE: &str = r#"Convert the following company research search output into a well-structured JSON object.
If you do not find relevant information for a field, fill it in with data from your own knowledge base.

Return ONLY valid JSON. No explanations.

Expected structure:
{
  "company_info": {
    "mission_statement": "",
    "core_values": "",
    "engineering_culture": "",
    "interview_process": "",
    "common_interview_questions": [],
    "leetcode_topics": [],
    "recent_news": []
  }
}

Raw content:
{raw_content}"#;

/// Replace `{company}` and `{topics}`.
pub const LEETCODE_PROMPT_TEMPLATE: &str = r#"Find the best 3 LeetCode problems that are frequently asked by {company} for software engineer interviews.
Use this list of topics: {topics}, and pick problems that cover those topics.
If the list does not give enough context, use known problems asked by {company}.
If there is still not enough context, take your best guess at what LeetCode problems the interviewer could ask based on the kind of work {company} does.

Return ONLY valid JSON.
Format:
[
  {"problem_name": "", "url": ""}
]"#;

/// Replace `{count}`, `{level}`, `{job_data}` and `{user_data}`.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Create {count} practice interview questions based on the following job description and user's resume.
Ask something an interviewer from that company would ask a {level}.

Return ONLY valid JSON in this format:
{
  "questions": [
    {"question": "", "category": "technical | behavioral | system_design | resume", "rationale": ""}
  ]
}

Job Description: {job_data}
User Data: {user_data}"#;

/// Replace `{question}` and `{answer}`.
pub const INTERVIEW_FEEDBACK_PROMPT_TEMPLATE: &str = "\
Given the interview question: {question}
and the user's answer: {answer}
Generate feedback on the answer, including strengths and areas for improvement.";

/// Replace `{data}`.
pub const CHEAT_SHEET_PROMPT_TEMPLATE: &str = r#"You are an expert interview-analysis engine.

Given a deeply structured JSON payload describing:
- job posting data
- company research
- candidate profile
- interviewer profile
- fit score analysis
- references
- leetcode topics
- people in similar roles

return a SINGLE JSON object with the fields below, containing the most
useful and distilled insights for interview preparation.

IMPORTANT:
- Do NOT return HTML.
- Do NOT return markdown.
- Only return valid pure JSON.
- Do NOT include commentary.
- Summaries must be short, actionable, and conversationally useful.

EXPECTED OUTPUT SHAPE (strict):
{
  "speakPoints": string[],
  "companyMustKnows": string[],
  "recentNews": string[],
  "peopleExperience": [
    {"name": string, "role": string, "interviewTip": string}
  ],
  "leetcodeTopics": string[],
  "interviewerIntel": {
    "technicalSpecialties": string[],
    "affiliations": string[],
    "backgroundSummary": string
  },
  "fitScoreSummary": {
    "overall": number,
    "skillsGaps": string[],
    "recommendedImprovements": string[]
  }
}

HOW TO GENERATE THESE FIELDS:
1. speakPoints (8 max): conversational hooks from the interviewer's specialties and
   background, shared affiliations or alma maters, skill gaps from the fit score, and
   company values or interview patterns. Actionable, not generic.
2. companyMustKnows (3-5 bullets): mission, core values, engineering culture, interview process.
3. recentNews: derive from the job and company context.
4. peopleExperience: people in similar roles (from references) with a role and an interview tip.
5. leetcodeTopics (10 max): from company_data.leetcode_topics when present, otherwise from the job's technical skills.
6. interviewerIntel: technical specialty areas inferred from experience, affiliations
   (schools, orgs), and a 1-2 sentence background summary.
7. fitScoreSummary: overall copied from fit_score.overall_fit_score, skills gaps from the
   low-scoring categories, and specific recommendations to close them.

Now generate the JSON output using the following data:

{data}

REMINDER:
Only return valid JSON. No commentary, no markdown, no explanations."#;

//! Practice questions and answer feedback.

use tracing::info;

use crate::enrichment::prompts::{
    INTERVIEW_FEEDBACK_PROMPT_TEMPLATE, INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
};
use crate::enrichment::{render, structure, to_prompt_json, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::llm_client::Completion;
use crate::models::interview::{InterviewQuestions, QUESTION_COUNT};
use crate::models::job::JobRecord;
use crate::models::resume::ResumeRecord;

const DEFAULT_LEVEL: &str = "Intern Level Software Engineer";

impl EnrichmentClient {
    pub async fn create_interview_questions(
        &self,
        job: &JobRecord,
        resume: &ResumeRecord,
    ) -> Result<InterviewQuestions, AppError> {
        let level = candidate_level(job);
        let count = QUESTION_COUNT.to_string();
        let job_json = to_prompt_json(job)?;
        let resume_json = to_prompt_json(resume)?;
        let prompt = render(
            INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
            &[
                ("count", &count),
                ("level", &level),
                ("job_data", &job_json),
                ("user_data", &resume_json),
            ],
        );

        let questions: InterviewQuestions = structure(
            self.llm(),
            "interview questions",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!("Generated {} interview questions", questions.questions.len());
        Ok(questions)
    }

    /// Free-text feedback on one answer. No JSON shape is enforced.
    pub async fn interview_dialogue(&self, question: &str, answer: &str) -> Result<String, AppError> {
        let prompt = render(
            INTERVIEW_FEEDBACK_PROMPT_TEMPLATE,
            &[("question", question), ("answer", answer)],
        );
        let feedback = self
            .llm()
            .complete(Completion::fast(PLAIN_TEXT_SYSTEM, &prompt))
            .await
            .map_err(|e| AppError::from_llm("interview feedback", e))?;
        Ok(feedback.trim().to_string())
    }
}

/// "<seniority> <title>" from the posting, or the intern default.
fn candidate_level(job: &JobRecord) -> String {
    let parts: Vec<&str> = [
        job.job_info.seniority_level.as_deref(),
        job.job_info.title.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect();

    if parts.is_empty() {
        DEFAULT_LEVEL.to_string()
    } else {
        parts.join(" ")
    }
}

//! Résumé Structurer — asks the text-generation provider to reshape raw résumé
//! text into a `ResumeRecord`.

use tracing::info;

use crate::enrichment::structure;
use crate::errors::AppError;
use crate::llm_client::{Completion, TextGenerator};
use crate::models::resume::ResumeRecord;
use crate::resume::prompts::{RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM};

const STAGE: &str = "resume";

/// Structures the joined page text. Not retried on a malformed reply.
pub async fn structure_resume(
    llm: &dyn TextGenerator,
    resume_text: &str,
) -> Result<ResumeRecord, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::structuring(
            STAGE,
            "document contains no extractable text",
        ));
    }

    let prompt = RESUME_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let record: ResumeRecord = structure(llm, STAGE, Completion::deep(RESUME_SYSTEM, &prompt)).await?;

    info!(
        "Resume structured: {} education, {} experience, {} skills",
        record.education.len(),
        record.experience.len(),
        record.skills.len()
    );
    Ok(record)
}

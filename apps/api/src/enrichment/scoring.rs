//! Fit score — résumé vs job, scored only from what the two records contain.

use tracing::info;

use crate::enrichment::prompts::FIT_SCORE_PROMPT_TEMPLATE;
use crate::enrichment::{render, structure, to_prompt_json, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::Completion;
use crate::models::fit_score::FitScoreRecord;
use crate::models::job::JobRecord;
use crate::models::resume::ResumeRecord;

impl EnrichmentClient {
    pub async fn generate_fit_score(
        &self,
        job: &JobRecord,
        resume: &ResumeRecord,
    ) -> Result<FitScoreRecord, AppError> {
        let job_json = to_prompt_json(job)?;
        let resume_json = to_prompt_json(resume)?;
        let prompt = render(
            FIT_SCORE_PROMPT_TEMPLATE,
            &[("job_description", &job_json), ("user_data", &resume_json)],
        );

        let fit: FitScoreRecord = structure(
            self.llm(),
            "fit score",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!("Fit score: {}/100", fit.overall_fit_score);
        Ok(fit)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::fit_score::FIT_CATEGORIES;
    use crate::models::resume::ContactInfo;
    use crate::testing::ScriptedLlm;
    use std::sync::Arc;

    pub(crate) fn fit_reply(overall: i64) -> String {
        let categories = FIT_CATEGORIES
            .iter()
            .map(|name| format!(r#""{name}": {{"score": {overall}, "reason": "Stated in resume."}}"#))
            .collect::<Vec<_>>()
            .join(",");
        format!(r#"{{"overall_fit_score": {overall}, "categories": {{{categories}}}}}"#)
    }

    fn resume() -> ResumeRecord {
        ResumeRecord {
            user_info: ContactInfo {
                name: Some("John Doe".to_string()),
                ..Default::default()
            },
            education: vec![],
            experience: vec![],
            skills: vec!["Rust".to_string()],
        }
    }

    #[tokio::test]
    async fn test_fit_score_embeds_both_records() {
        let llm = Arc::new(ScriptedLlm::new().reply("Fit Score", &fit_reply(64)));
        let client = EnrichmentClient::new(llm.clone(), Arc::new(crate::testing::FakeSearch::new()));

        let fit = client
            .generate_fit_score(&JobRecord::default(), &resume())
            .await
            .unwrap();
        assert_eq!(fit.overall_fit_score, 64);
        assert!((0..=100).contains(&fit.overall_fit_score));
        assert!(fit.categories.values().all(|c| (0..=100).contains(&c.score)));

        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("\"job_info\""));
        assert!(prompt.contains("John Doe"));
    }

    #[tokio::test]
    async fn test_out_of_range_fit_score_is_rejected() {
        let client = crate::testing::enrichment_client(
            ScriptedLlm::new().reply("Fit Score", &fit_reply(120)),
            crate::testing::FakeSearch::new(),
        );
        let err = client
            .generate_fit_score(&JobRecord::default(), &resume())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StructuringFailed { stage: "fit score", .. }));
    }
}

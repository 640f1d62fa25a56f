//! Cheat sheet — one synthesis call over every upstream record.

use serde::Serialize;
use tracing::info;

use crate::enrichment::prompts::CHEAT_SHEET_PROMPT_TEMPLATE;
use crate::enrichment::{render, structure, to_prompt_json, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::Completion;
use crate::models::cheat_sheet::CheatSheetRecord;
use crate::models::fit_score::FitScoreRecord;
use crate::models::job::JobRecord;
use crate::models::profile::ProfileRecord;
use crate::models::references::ReferenceList;
use crate::models::research::CompanyResearch;
use crate::models::resume::ResumeRecord;

/// Everything the synthesis step sees, embedded in the prompt as JSON.
#[derive(Debug, Serialize)]
pub struct CheatSheetInput<'a> {
    pub company_name: &'a str,
    pub job_data: &'a JobRecord,
    pub candidate: &'a ResumeRecord,
    pub profile_data: &'a ProfileRecord,
    pub fit_score: &'a FitScoreRecord,
    pub references: &'a ReferenceList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_data: Option<&'a CompanyResearch>,
}

impl EnrichmentClient {
    pub async fn cheat_sheet(&self, input: &CheatSheetInput<'_>) -> Result<CheatSheetRecord, AppError> {
        let data = to_prompt_json(input)?;
        let prompt = render(CHEAT_SHEET_PROMPT_TEMPLATE, &[("data", &data)]);

        let sheet: CheatSheetRecord = structure(
            self.llm(),
            "cheat sheet",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!(
            "Cheat sheet synthesized: {} speak points, {} must-knows",
            sheet.speak_points.len(),
            sheet.company_must_knows.len()
        );
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::scoring::tests::fit_reply;
    use crate::testing::{FakeSearch, ScriptedLlm};
    use std::sync::Arc;

    const SHEET_REPLY: &str = r#"{
        "speakPoints": ["Ask about their move from Acme to Salesforce"],
        "companyMustKnows": ["Trust is the #1 value"],
        "recentNews": [],
        "peopleExperience": [],
        "leetcodeTopics": ["arrays"],
        "interviewerIntel": {"technicalSpecialties": ["Java"], "affiliations": ["FIU"], "backgroundSummary": "Backend engineer."},
        "fitScoreSummary": {"overall": 64, "skillsGaps": ["Java"], "recommendedImprovements": ["Build a Spring service"]}
    }"#;

    #[tokio::test]
    async fn test_cheat_sheet_embeds_every_record() {
        let llm = Arc::new(ScriptedLlm::new().reply("interview-analysis engine", SHEET_REPLY));
        let client = EnrichmentClient::new(llm.clone(), Arc::new(FakeSearch::new()));

        let resume: ResumeRecord = serde_json::from_str(
            r#"{"user_info": {"name": "John Doe"}, "education": [], "experience": [], "skills": []}"#,
        )
        .unwrap();
        let fit: FitScoreRecord = serde_json::from_str(&fit_reply(64)).unwrap();
        let profile: ProfileRecord =
            serde_json::from_str(r#"{"user_info": {"name": "Dariel"}}"#).unwrap();
        let job = JobRecord::default();
        let references = ReferenceList::default();
        let input = CheatSheetInput {
            company_name: "Salesforce",
            job_data: &job,
            candidate: &resume,
            profile_data: &profile,
            fit_score: &fit,
            references: &references,
            company_data: None,
        };

        let sheet = client.cheat_sheet(&input).await.unwrap();
        assert_eq!(sheet.fit_score_summary.overall, 64);

        let prompt = &llm.prompts()[0];
        for needle in ["\"company_name\": \"Salesforce\"", "John Doe", "Dariel", "overall_fit_score"] {
            assert!(prompt.contains(needle), "prompt is missing {needle}");
        }
        assert!(!prompt.contains("\"company_data\""));
    }
}

//! Pipeline Orchestrator — sequences the résumé stages, then fans out enrichment.
//!
//! Flow: extract pages → structure résumé →
//!       group A (company name ∥ job description) →
//!       group B (profile ∥ fit score ∥ references ∥ questions [∥ research → leetcode]) →
//!       cheat sheet → response.
//!
//! Each group is joined with `try_join!`: the first failure fails the run and
//! drops the sibling futures. There is no partial result.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::enrichment::cheat_sheet::CheatSheetInput;
use crate::enrichment::EnrichmentClient;
use crate::errors::AppError;
use crate::models::cheat_sheet::CheatSheetRecord;
use crate::models::fit_score::FitScoreRecord;
use crate::models::interview::InterviewQuestions;
use crate::models::job::JobRecord;
use crate::models::profile::ProfileRecord;
use crate::models::references::ReferenceList;
use crate::models::research::{CompanyResearch, LeetcodeProblem};
use crate::models::resume::ResumeRecord;
use crate::resume::extractor::{extract_pages_blocking, join_pages};
use crate::resume::structurer::structure_resume;

#[derive(Debug, Clone)]
pub struct PipelineInput {
    pub document: Bytes,
    pub job_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Also run company research and LeetCode selection in group B.
    pub research: bool,
}

/// The assembled response. The two research fields only appear on extended runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub company_name: String,
    pub job_data: JobRecord,
    pub profile_data: ProfileRecord,
    pub fit_score: FitScoreRecord,
    pub references: ReferenceList,
    pub questions: InterviewQuestions,
    pub cheat_sheet: CheatSheetRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_data: Option<CompanyResearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leetcode_problems: Option<Vec<LeetcodeProblem>>,
}

/// Runs the whole pipeline for one uploaded résumé.
pub async fn run_pipeline(
    client: &EnrichmentClient,
    input: PipelineInput,
    options: RunOptions,
    run_id: Uuid,
) -> Result<PipelineOutput, AppError> {
    let span = info_span!("pipeline", %run_id);

    async move {
        // Step 1: Extract page texts
        let pages = extract_pages_blocking(input.document).await?;
        info!("Extracted {} pages", pages.len());

        // Step 2: Structure résumé
        let resume = structure_resume(client.llm(), &join_pages(&pages)).await?;

        // Steps 3-6
        enrich(client, &resume, &input.job_url, &input.linkedin_url, options).await
    }
    .instrument(span)
    .await
}

/// Everything after the résumé is structured: both fan-out groups and the synthesis.
pub async fn enrich(
    client: &EnrichmentClient,
    resume: &ResumeRecord,
    job_url: &str,
    linkedin_url: &str,
    options: RunOptions,
) -> Result<PipelineOutput, AppError> {
    // Step 3: Group A. Job data feeds most of group B
    let (company_name, job_data) = tokio::try_join!(
        client.extract_company_name(job_url),
        client.search_job_description(job_url),
    )?;
    info!("Group A complete for {company_name}");

    // Step 4: Group B
    let research = async {
        if !options.research {
            return Ok::<_, AppError>(None);
        }
        let research = client.company_research(&company_name).await?;
        let problems = client.get_leetcode(&research, &company_name).await?;
        Ok(Some((research, problems)))
    };
    let (profile_data, fit_score, references, questions, research) = tokio::try_join!(
        client.scrape_linkedin_profile(linkedin_url),
        client.generate_fit_score(&job_data, resume),
        client.find_references(&company_name),
        client.create_interview_questions(&job_data, resume),
        research,
    )?;
    info!("Group B complete: fit score {}/100", fit_score.overall_fit_score);

    let (company_data, leetcode_problems) = match research {
        Some((research, problems)) => (Some(research), Some(problems)),
        None => (None, None),
    };

    // Step 5: Synthesize
    let cheat_sheet = client
        .cheat_sheet(&CheatSheetInput {
            company_name: &company_name,
            job_data: &job_data,
            candidate: resume,
            profile_data: &profile_data,
            fit_score: &fit_score,
            references: &references,
            company_data: company_data.as_ref(),
        })
        .await?;

    // Step 6: Assemble
    Ok(PipelineOutput {
        company_name,
        job_data,
        profile_data,
        fit_score,
        references,
        questions,
        cheat_sheet,
        company_data,
        leetcode_problems,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::enrichment::scoring::tests::fit_reply;
    use crate::resume::extractor::tests::pdf_with_pages;
    use crate::testing::{enrichment_client, FakeSearch, ScriptedLlm};
    use std::time::Duration;

    pub(crate) const JOB_URL: &str = "https://example.com/job/123";
    pub(crate) const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jdoe-interviewer/";

    pub(crate) const RESUME_REPLY: &str = r#"{
        "user_info": {"name": "John Doe", "email": "john@x.com", "phone": null, "linkedin": null},
        "education": [], "experience": [], "skills": []
    }"#;
    const JOB_REPLY: &str = r#"{
        "job_info": {"title": "Software Engineer Intern", "company": "Example Corp"},
        "description": {"summary": "Intern role", "responsibilities": ["Write Rust"]}
    }"#;
    const PROFILE_REPLY: &str = r#"{"user_info": {"name": "Jane Interviewer", "headline": "Staff Engineer"}}"#;
    const REFERENCES_REPLY: &str =
        r#"{"references": [{"name": "Ada", "linkedin_url": "https://linkedin.com/in/ada", "email": null}]}"#;
    const QUESTIONS_REPLY: &str = r#"{"questions": [
        {"question": "Q1?"}, {"question": "Q2?"}, {"question": "Q3?"}, {"question": "Q4?"}, {"question": "Q5?"}
    ]}"#;
    const SHEET_REPLY: &str = r#"{
        "speakPoints": ["Ask Jane about Rust at Example Corp"],
        "companyMustKnows": ["Ships fast"],
        "fitScoreSummary": {"overall": 55, "skillsGaps": [], "recommendedImprovements": []}
    }"#;
    const RESEARCH_REPLY: &str =
        r#"{"company_info": {"mission_statement": "Make examples", "leetcode_topics": ["arrays"]}}"#;
    const LEETCODE_REPLY: &str =
        r#"[{"problem_name": "Two Sum", "url": "https://leetcode.com/problems/two-sum/"}]"#;

    /// Scripted providers for a full happy-path run. `slow` delays the named
    /// group-B prompts so tests can reverse completion order.
    pub(crate) fn happy_providers(slow: &[(&str, u64)]) -> (ScriptedLlm, FakeSearch) {
        let delay_for = |needle: &str| {
            slow.iter()
                .find(|(n, _)| *n == needle)
                .map(|(_, ms)| Duration::from_millis(*ms))
                .unwrap_or(Duration::ZERO)
        };
        let fit = fit_reply(55);
        let group_b = [
            ("LinkedIn-style search output", PROFILE_REPLY),
            ("\"Fit Score\"", fit.as_str()),
            ("references search output", REFERENCES_REPLY),
            ("practice interview questions", QUESTIONS_REPLY),
        ];

        let mut llm = ScriptedLlm::new()
            .reply("interview-analysis engine", SHEET_REPLY)
            .reply("Resume text:", RESUME_REPLY)
            .reply("Extract the company NAME", "Example Corp")
            .reply("messy job description", JOB_REPLY)
            .reply("company research search output", RESEARCH_REPLY)
            .reply("LeetCode problems", LEETCODE_REPLY);
        for (needle, reply) in group_b {
            llm = llm.reply_after(needle, reply, delay_for(needle));
        }

        let search = FakeSearch::new()
            .on_extract("example.com/job/123", &["Software Engineer Intern at Example Corp"])
            .on_search("jdoe-interviewer", &["Jane Interviewer - Staff Engineer"])
            .on_search("mission statement", &["Example Corp builds examples"])
            .on_search("Example Corp", &["Ada - SWE Intern at Example Corp"]);

        (llm, search)
    }

    pub(crate) fn resume() -> ResumeRecord {
        serde_json::from_str(RESUME_REPLY).unwrap()
    }

    #[tokio::test]
    async fn test_full_pipeline_from_pdf() {
        let (llm, search) = happy_providers(&[]);
        let client = enrichment_client(llm, search);
        let input = PipelineInput {
            document: Bytes::from(pdf_with_pages(&["John Doe, john@x.com"])),
            job_url: JOB_URL.to_string(),
            linkedin_url: LINKEDIN_URL.to_string(),
        };

        let output = run_pipeline(&client, input, RunOptions::default(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(output.company_name, "Example Corp");
        assert_eq!(output.profile_data.user_info.name.as_deref(), Some("Jane Interviewer"));
        assert_eq!(output.references.references.len(), 1);
        assert_eq!(output.questions.questions.len(), 5);
        assert_eq!(output.cheat_sheet.fit_score_summary.overall, 55);

        let value = serde_json::to_value(&output).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "cheat_sheet",
                "company_name",
                "fit_score",
                "job_data",
                "profile_data",
                "questions",
                "references"
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_document_fails_before_any_provider_call() {
        let (llm, search) = happy_providers(&[]);
        let client = enrichment_client(llm, search);
        let input = PipelineInput {
            document: Bytes::new(),
            job_url: JOB_URL.to_string(),
            linkedin_url: LINKEDIN_URL.to_string(),
        };
        let err = run_pipeline(&client, input, RunOptions::default(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDocument(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_group_b_completion_order_does_not_change_result() {
        let (llm, search) = happy_providers(&[
            ("LinkedIn-style search output", 40),
            ("\"Fit Score\"", 30),
            ("references search output", 20),
            ("practice interview questions", 10),
        ]);
        let forward = enrich(
            &enrichment_client(llm, search),
            &resume(),
            JOB_URL,
            LINKEDIN_URL,
            RunOptions::default(),
        )
        .await
        .unwrap();

        let (llm, search) = happy_providers(&[
            ("LinkedIn-style search output", 10),
            ("\"Fit Score\"", 20),
            ("references search output", 30),
            ("practice interview questions", 40),
        ]);
        let reversed = enrich(
            &enrichment_client(llm, search),
            &resume(),
            JOB_URL,
            LINKEDIN_URL,
            RunOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(forward, reversed);
    }

    #[tokio::test]
    async fn test_research_run_adds_company_data_and_leetcode() {
        let (llm, search) = happy_providers(&[]);
        let output = enrich(
            &enrichment_client(llm, search),
            &resume(),
            JOB_URL,
            LINKEDIN_URL,
            RunOptions { research: true },
        )
        .await
        .unwrap();

        let research = output.company_data.as_ref().unwrap();
        assert_eq!(research.leetcode_topics(), ["arrays"]);
        assert_eq!(output.leetcode_problems.as_ref().unwrap()[0].problem_name, "Two Sum");

        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("company_data").is_some());
        assert!(value.get("leetcode_problems").is_some());
    }

    #[tokio::test]
    async fn test_unreachable_job_url_fails_whole_run() {
        let (llm, _) = happy_providers(&[]);
        let search = FakeSearch::new().unreachable("unreachable.invalid");
        let err = enrich(
            &enrichment_client(llm, search),
            &resume(),
            "https://unreachable.invalid/job/1",
            LINKEDIN_URL,
            RunOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::ProviderUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_group_b_failure_fails_whole_run() {
        let (_, search) = happy_providers(&[]);
        let llm = ScriptedLlm::new()
            .reply("Extract the company NAME", "Example Corp")
            .reply("messy job description", JOB_REPLY)
            .reply("LinkedIn-style search output", PROFILE_REPLY)
            .reply("\"Fit Score\"", "not json at all")
            .reply("references search output", REFERENCES_REPLY)
            .reply("practice interview questions", QUESTIONS_REPLY);
        let err = enrich(
            &enrichment_client(llm, search),
            &resume(),
            JOB_URL,
            LINKEDIN_URL,
            RunOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::StructuringFailed { stage: "fit score", .. }));
    }
}

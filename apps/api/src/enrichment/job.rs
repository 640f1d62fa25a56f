//! Company name and job description lookups from a job-posting URL.

use tracing::info;

use crate::enrichment::prompts::{
    COMPANY_NAME_PROMPT_TEMPLATE, JOB_DESCRIPTION_OBJECTIVE, STRUCTURE_JOB_PROMPT_TEMPLATE,
};
use crate::enrichment::{render, structure, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::llm_client::Completion;
use crate::models::job::JobRecord;
use crate::search_client::{flatten_excerpts, ExtractRequest, SearchError, DEFAULT_CHAR_BUDGET};

impl EnrichmentClient {
    /// Asks the model for the hiring company's name, given only the URL.
    pub async fn extract_company_name(&self, job_url: &str) -> Result<String, AppError> {
        let prompt = render(COMPANY_NAME_PROMPT_TEMPLATE, &[("job_url", job_url)]);
        let reply = self
            .llm()
            .complete(Completion::fast(PLAIN_TEXT_SYSTEM, &prompt))
            .await
            .map_err(|e| AppError::from_llm("company name", e))?;

        let name = clean_company_name(&reply);
        if name.is_empty() {
            return Err(AppError::structuring("company name", "reply contained no name"));
        }
        info!("Company name resolved: {name}");
        Ok(name)
    }

    /// Extracts the posting's excerpts and reshapes them into a `JobRecord`.
    pub async fn search_job_description(&self, job_url: &str) -> Result<JobRecord, AppError> {
        let results = self
            .search()
            .extract(&ExtractRequest::excerpts(job_url, JOB_DESCRIPTION_OBJECTIVE))
            .await
            .map_err(AppError::from_search)?;

        let first = results
            .first()
            .ok_or_else(|| AppError::from_search(SearchError::EmptyResults("job posting extract")))?;
        let raw_content = flatten_excerpts(std::slice::from_ref(first), DEFAULT_CHAR_BUDGET);
        if raw_content.trim().is_empty() {
            return Err(AppError::structuring(
                "job description",
                "posting page returned no text",
            ));
        }

        let prompt = render(
            STRUCTURE_JOB_PROMPT_TEMPLATE,
            &[("job_url", job_url), ("raw_content", &raw_content)],
        );
        let job: JobRecord = structure(
            self.llm(),
            "job description",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!(
            "Job description structured: title={:?}, {} responsibilities",
            job.job_info.title,
            job.description.responsibilities.len()
        );
        Ok(job)
    }
}

/// First non-empty line, without wrapping quotes, markdown, or a trailing period.
fn clean_company_name(reply: &str) -> String {
    let line = reply
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    let line = strip_prefix_ignore_case(line, "company name:").unwrap_or(line);
    line.trim()
        .trim_end_matches('.')
        .trim_matches(|c| matches!(c, '"' | '\'' | '`' | '*'))
        .trim_end_matches('.')
        .trim()
        .to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

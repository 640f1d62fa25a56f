//! Interviewer profile lookup from a LinkedIn URL.

use tracing::info;

use crate::enrichment::prompts::{LINKEDIN_OBJECTIVE, STRUCTURE_PROFILE_PROMPT_TEMPLATE};
use crate::enrichment::{render, structure, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::Completion;
use crate::models::profile::ProfileRecord;
use crate::search_client::{
    flatten_excerpts, SearchError, SearchRequest, DEFAULT_CHAR_BUDGET,
};

const PROFILE_MAX_RESULTS: u32 = 11;

impl EnrichmentClient {
    /// Searches for the profile by raw URL and by derived handle, then
    /// structures the top result.
    pub async fn scrape_linkedin_profile(&self, linkedin_url: &str) -> Result<ProfileRecord, AppError> {
        let handle = linkedin_handle(linkedin_url);
        let request = SearchRequest::new(
            LINKEDIN_OBJECTIVE,
            vec![
                linkedin_url.trim().to_string(),
                format!("linkedin profile for {handle}"),
            ],
        )
        .max_results(PROFILE_MAX_RESULTS);

        let results = self
            .search()
            .search(&request)
            .await
            .map_err(AppError::from_search)?;
        let first = results
            .first()
            .ok_or_else(|| AppError::from_search(SearchError::EmptyResults("profile search")))?;

        let raw_content = flatten_excerpts(std::slice::from_ref(first), DEFAULT_CHAR_BUDGET);
        let prompt = render(STRUCTURE_PROFILE_PROMPT_TEMPLATE, &[("raw_content", &raw_content)]);
        let profile: ProfileRecord = structure(
            self.llm(),
            "linkedin profile",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!(
            "Profile structured for '{handle}': {} experience entries",
            profile.experience.len()
        );
        Ok(profile)
    }
}

/// Last path segment of a profile URL: `https://www.linkedin.com/in/jane-doe/?x=1` → `jane-doe`.
/// Falls back to the trimmed input when there is no path.
pub fn linkedin_handle(url: &str) -> String {
    let trimmed = url.trim();
    let without_query = trimmed
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(trimmed)
        .trim_end_matches('/');
    let path = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);
    match path.split_once('/') {
        Some((_, segments)) => segments
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or(path)
            .to_string(),
        None => path.to_string(),
    }
}

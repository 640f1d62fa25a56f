//! References — people who held a similar role at the company.

use tracing::info;

use crate::enrichment::prompts::{
    REFERENCES_OBJECTIVE, REFERENCES_QUERY_TEMPLATE, STRUCTURE_REFERENCES_PROMPT_TEMPLATE,
};
use crate::enrichment::{render, structure, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::Completion;
use crate::models::references::ReferenceList;
use crate::search_client::{flatten_excerpts, SearchRequest, DEFAULT_CHAR_BUDGET};

const REFERENCES_MAX_RESULTS: u32 = 11;
/// Role searched for when looking up references.
pub const REFERENCE_ROLE: &str = "software engineer intern";

impl EnrichmentClient {
    pub async fn find_references(&self, company_name: &str) -> Result<ReferenceList, AppError> {
        let query = render(
            REFERENCES_QUERY_TEMPLATE,
            &[("company", company_name), ("role", REFERENCE_ROLE)],
        );
        let request = SearchRequest::new(REFERENCES_OBJECTIVE, vec![query])
            .max_results(REFERENCES_MAX_RESULTS);

        let results = self
            .search()
            .search(&request)
            .await
            .map_err(AppError::from_search)?;

        // Nobody found is a valid answer; skip the structuring call.
        let raw_content = flatten_excerpts(&results, DEFAULT_CHAR_BUDGET);
        if raw_content.trim().is_empty() {
            info!("No reference candidates found for {company_name}");
            return Ok(ReferenceList::default());
        }

        let prompt = render(
            STRUCTURE_REFERENCES_PROMPT_TEMPLATE,
            &[("raw_content", &raw_content)],
        );
        let references: ReferenceList = structure(
            self.llm(),
            "references",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!("Found {} references at {company_name}", references.references.len());
        Ok(references)
    }
}

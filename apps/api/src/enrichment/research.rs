//! Company research and the LeetCode problems derived from it.

use tracing::info;

use crate::enrichment::prompts::{
    LEETCODE_PROMPT_TEMPLATE, RESEARCH_OBJECTIVE_TEMPLATE, RESEARCH_QUERY_TEMPLATES,
    STRUCTURE_RESEARCH_PROMPT_TEMPLATE,
};
use crate::enrichment::{render, structure, to_prompt_json, EnrichmentClient};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::Completion;
use crate::models::research::{CompanyResearch, LeetcodeProblem, LeetcodeReply};
use crate::search_client::{flatten_excerpts, SearchRequest};

const RESEARCH_MAX_RESULTS: u32 = 10;
/// Research excerpts are cut to this many chars before structuring.
pub const RESEARCH_CHAR_BUDGET: usize = 8_000;

impl EnrichmentClient {
    /// Five fixed queries about culture, interview process, LeetCode topics and news.
    ///
    /// This is the one structuring step allowed to fill gaps from the model's
    /// own knowledge, so it runs on the deep model.
    pub async fn company_research(&self, company_name: &str) -> Result<CompanyResearch, AppError> {
        let objective = render(RESEARCH_OBJECTIVE_TEMPLATE, &[("company", company_name)]);
        let queries = RESEARCH_QUERY_TEMPLATES
            .iter()
            .map(|t| render(t, &[("company", company_name)]))
            .collect();
        let request = SearchRequest::new(objective, queries)
            .max_results(RESEARCH_MAX_RESULTS)
            .one_shot();

        let results = self
            .search()
            .search(&request)
            .await
            .map_err(AppError::from_search)?;

        let raw_content = flatten_excerpts(&results, RESEARCH_CHAR_BUDGET);
        let prompt = render(
            STRUCTURE_RESEARCH_PROMPT_TEMPLATE,
            &[("raw_content", &raw_content)],
        );
        let research: CompanyResearch = structure(
            self.llm(),
            "company research",
            Completion::deep(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        info!(
            "Company research for {company_name}: {} leetcode topics, {} news items",
            research.company_info.leetcode_topics.len(),
            research.company_info.recent_news.len()
        );
        Ok(research)
    }

    /// Picks practice problems covering the research's LeetCode topics.
    pub async fn get_leetcode(
        &self,
        research: &CompanyResearch,
        company_name: &str,
    ) -> Result<Vec<LeetcodeProblem>, AppError> {
        let topics = to_prompt_json(&research.leetcode_topics())?;
        let prompt = render(
            LEETCODE_PROMPT_TEMPLATE,
            &[("company", company_name), ("topics", &topics)],
        );

        let reply: LeetcodeReply = structure(
            self.llm(),
            "leetcode problems",
            Completion::fast(JSON_ONLY_SYSTEM, &prompt),
        )
        .await?;

        let problems = reply.into_problems();
        info!("{} leetcode problems selected for {company_name}", problems.len());
        Ok(problems)
    }
}

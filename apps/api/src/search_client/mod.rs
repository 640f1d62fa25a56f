//! Search Client — the single point of entry for web search and page extraction.
//!
//! Talks to the Parallel search/extract API. Callers depend on the `WebSearch`
//! trait so tests can inject canned results.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const SEARCH_PATH: &str = "/v1beta/search";
const EXTRACT_PATH: &str = "/v1beta/extract";
const BETA_HEADER: &str = "search-extract-2025-10-10";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Default excerpt budget per flattened blob.
pub const DEFAULT_CHAR_BUDGET: usize = 20_000;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Could not decode search response: {0}")]
    Decode(String),

    #[error("{0} returned no results")]
    EmptyResults(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExcerptSettings {
    pub max_chars_per_result: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub objective: String,
    pub search_queries: Vec<String>,
    pub max_results: u32,
    pub excerpts: ExcerptSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl SearchRequest {
    pub fn new(objective: impl Into<String>, search_queries: Vec<String>) -> Self {
        Self {
            objective: objective.into(),
            search_queries,
            max_results: 10,
            excerpts: ExcerptSettings {
                max_chars_per_result: 10_000,
            },
            mode: None,
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn one_shot(mut self) -> Self {
        self.mode = Some("one-shot".to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub objective: String,
    pub excerpts: bool,
    pub full_content: bool,
}

impl ExtractRequest {
    /// Excerpts only, no full page content.
    pub fn excerpts(url: impl Into<String>, objective: impl Into<String>) -> Self {
        Self {
            urls: vec![url.into()],
            objective: objective.into(),
            excerpts: true,
            full_content: false,
        }
    }
}

/// One page returned by search or extract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError>;
    async fn extract(&self, request: &ExtractRequest) -> Result<Vec<SearchResult>, SearchError>;
}

/// HTTP-backed search client, built once at startup and shared.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: String,
    backoff: Duration,
}

impl SearchClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            backoff: INITIAL_BACKOFF,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Retries on connection errors, 429 and 5xx with exponential backoff.
    /// Other non-2xx statuses fail immediately.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}{path}", self.base_url);
        let mut last_error: Option<SearchError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.backoff * (1u32 << (attempt - 1));
                warn!(
                    "{path} attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("parallel-beta", BETA_HEADER)
                .json(body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(SearchError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("Search API returned {status}: {message}");
                last_error = Some(SearchError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(SearchError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let text = response.text().await?;
            let envelope: ResultsEnvelope =
                serde_json::from_str(&text).map_err(|e| SearchError::Decode(e.to_string()))?;
            debug!("{path} returned {} results", envelope.results.len());
            return Ok(envelope.results);
        }

        Err(last_error.unwrap_or(SearchError::Api {
            status: 503,
            message: format!("no response after {MAX_RETRIES} attempts"),
        }))
    }
}

#[async_trait]
impl WebSearch for SearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        self.post(SEARCH_PATH, request).await
    }

    async fn extract(&self, request: &ExtractRequest) -> Result<Vec<SearchResult>, SearchError> {
        self.post(EXTRACT_PATH, request).await
    }
}

/// Joins the excerpts of every result into one blob: excerpts by newline,
/// results by a blank line. Truncated on a char boundary to `budget` chars.
pub fn flatten_excerpts(results: &[SearchResult], budget: usize) -> String {
    let joined = results
        .iter()
        .map(|r| r.excerpts.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    truncate_chars(&joined, budget)
}

fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

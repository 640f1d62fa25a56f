//! Scripted provider fakes shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::enrichment::EnrichmentClient;
use crate::llm_client::{Completion, LlmError, ModelTier, TextGenerator};
use crate::search_client::{
    ExtractRequest, SearchError, SearchRequest, SearchResult, WebSearch,
};

#[derive(Clone)]
enum Reply {
    Text(String),
    Delayed(String, Duration),
    Unavailable,
}

/// Answers each prompt with the first rule whose needle occurs in it.
#[derive(Default)]
pub struct ScriptedLlm {
    rules: Vec<(String, Reply)>,
    calls: Mutex<Vec<(ModelTier, String)>>,
}

impl ScriptedLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, needle: &str, text: &str) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Text(text.to_string())));
        self
    }

    /// Replies after `delay`, so tests can force a completion order.
    pub fn reply_after(mut self, needle: &str, text: &str, delay: Duration) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Delayed(text.to_string(), delay)));
        self
    }

    pub fn unavailable(mut self, needle: &str) -> Self {
        self.rules.push((needle.to_string(), Reply::Unavailable));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn tiers(&self) -> Vec<ModelTier> {
        self.calls.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedLlm {
    async fn complete(&self, request: Completion<'_>) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.tier, request.prompt.to_string()));

        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Delayed(text, delay)) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Some(Reply::Unavailable) => Err(LlmError::Api {
                status: 503,
                message: "scripted outage".to_string(),
            }),
            None => Err(LlmError::Api {
                status: 500,
                message: format!("no scripted reply for prompt: {}", request.prompt),
            }),
        }
    }
}

/// Returns canned results keyed by a needle found in the queries/objective (search)
/// or in the URLs (extract).
#[derive(Default)]
pub struct FakeSearch {
    search_rules: Vec<(String, Vec<SearchResult>)>,
    extract_rules: Vec<(String, Option<Vec<SearchResult>>)>,
    searches: Mutex<Vec<SearchRequest>>,
}

impl FakeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(mut self, needle: &str, excerpts: &[&str]) -> Self {
        self.search_rules
            .push((needle.to_string(), vec![result_with(excerpts)]));
        self
    }

    pub fn on_extract(mut self, needle: &str, excerpts: &[&str]) -> Self {
        self.extract_rules
            .push((needle.to_string(), Some(vec![result_with(excerpts)])));
        self
    }

    pub fn unreachable(mut self, needle: &str) -> Self {
        self.extract_rules.push((needle.to_string(), None));
        self
    }

    pub fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().unwrap().clone()
    }
}

pub fn result_with(excerpts: &[&str]) -> SearchResult {
    SearchResult {
        url: "https://example.com/page".to_string(),
        title: Some("Example".to_string()),
        excerpts: excerpts.iter().map(|s| s.to_string()).collect(),
    }
}

#[async_trait]
impl WebSearch for FakeSearch {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
        self.searches.lock().unwrap().push(request.clone());
        let haystack = format!("{} {}", request.objective, request.search_queries.join(" "));
        Ok(self
            .search_rules
            .iter()
            .find(|(needle, _)| haystack.contains(needle.as_str()))
            .map(|(_, results)| results.clone())
            .unwrap_or_default())
    }

    async fn extract(&self, request: &ExtractRequest) -> Result<Vec<SearchResult>, SearchError> {
        let haystack = request.urls.join(" ");
        match self
            .extract_rules
            .iter()
            .find(|(needle, _)| haystack.contains(needle.as_str()))
        {
            Some((_, Some(results))) => Ok(results.clone()),
            Some((_, None)) => Err(SearchError::Api {
                status: 502,
                message: format!("could not fetch {haystack}"),
            }),
            None => Ok(vec![]),
        }
    }
}

pub fn enrichment_client(llm: ScriptedLlm, search: FakeSearch) -> EnrichmentClient {
    EnrichmentClient::new(Arc::new(llm), Arc::new(search))
}

type StubScript = Arc<Vec<(u16, &'static str)>>;

/// Local HTTP server that answers every request from a script of
/// `(status, body)` pairs, repeating the last entry, and counts hits.
pub struct StubServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl StubServer {
    pub async fn start(script: Vec<(u16, &'static str)>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .fallback(stub_reply)
            .with_state((Arc::new(script), hits.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn stub_reply(State((script, hits)): State<(StubScript, Arc<AtomicUsize>)>) -> Response {
    let n = hits.fetch_add(1, Ordering::SeqCst);
    let (status, body) = script[n.min(script.len() - 1)];
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

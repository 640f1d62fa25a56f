//! Enrichment Client — one operation per external lookup.
//!
//! Each operation wraps one search/extract call and/or one text-generation
//! call, and reshapes the reply into a typed record from `models`.
//! Providers are injected once at startup; operations never build their own.

pub mod cheat_sheet;
pub mod interview;
pub mod job;
pub mod profile;
pub mod prompts;
pub mod references;
pub mod research;
pub mod scoring;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;
use crate::llm_client::{complete_json, Completion, TextGenerator};
use crate::models::Validate;
use crate::search_client::WebSearch;

/// Shared handle over both providers. Cheap to clone.
#[derive(Clone)]
pub struct EnrichmentClient {
    llm: Arc<dyn TextGenerator>,
    search: Arc<dyn WebSearch>,
}

impl EnrichmentClient {
    pub fn new(llm: Arc<dyn TextGenerator>, search: Arc<dyn WebSearch>) -> Self {
        Self { llm, search }
    }

    pub fn llm(&self) -> &dyn TextGenerator {
        self.llm.as_ref()
    }

    pub(crate) fn search(&self) -> &dyn WebSearch {
        self.search.as_ref()
    }
}

/// The structuring step: one JSON completion, parsed into `T` and validated.
/// Any failure is reported as `StructuringFailed` (or `ProviderUnavailable`
/// for transport problems) and is not retried here.
pub async fn structure<T>(
    llm: &dyn TextGenerator,
    stage: &'static str,
    request: Completion<'_>,
) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let mut record: T = complete_json(llm, request)
        .await
        .map_err(|e| AppError::from_llm(stage, e))?;
    record
        .validate()
        .map_err(|reason| AppError::structuring(stage, reason))?;
    Ok(record)
}

/// Fills a prompt template in one pass. `{no_invention}` is always available;
/// other `{key}` tokens come from `pairs`. Inserted values are never rescanned,
/// and braces that do not name a known key are copied through unchanged.
pub(crate) fn render(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut prompt = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        prompt.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after
            .find('}')
            .and_then(|close| placeholder(&after[..close], pairs).map(|value| (value, close)));
        match filled {
            Some((value, close)) => {
                prompt.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                prompt.push('{');
                rest = after;
            }
        }
    }
    prompt.push_str(rest);
    prompt
}

fn placeholder<'a>(key: &str, pairs: &[(&str, &'a str)]) -> Option<&'a str> {
    if key == "no_invention" {
        return Some(NO_INVENTION_INSTRUCTION);
    }
    pairs.iter().find(|(k, _)| *k == key).map(|(_, value)| *value)
}

/// Pretty JSON for embedding a record in a prompt.
pub(crate) fn to_prompt_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.into()))
}

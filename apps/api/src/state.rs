use crate::enrichment::EnrichmentClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Both provider clients, built once at startup and shared by every request.
    pub enrichment: EnrichmentClient,
}

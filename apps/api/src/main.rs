mod cli;
mod config;
mod enrichment;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod resume;
mod routes;
mod search_client;
mod state;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::enrichment::EnrichmentClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search_client::SearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing provider keys)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireMe API v{}", env!("CARGO_PKG_VERSION"));

    // Provider clients are built once and shared by every request
    let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_api_url)?;
    info!(
        "LLM client initialized (models: {}, {})",
        llm_client::FAST_MODEL,
        llm_client::DEEP_MODEL
    );
    let search = SearchClient::new(config.parallel_api_key.clone(), &config.parallel_api_url)?;
    info!("Search client initialized ({})", config.parallel_api_url);

    let enrichment = EnrichmentClient::new(Arc::new(llm), Arc::new(search));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, enrichment).await,
        Command::Run {
            resume,
            job_url,
            linkedin,
            research,
            out,
        } => {
            let out = out.unwrap_or_else(|| PathBuf::from(&config.runs_file));
            cli::run_once(&enrichment, &resume, job_url, linkedin, research, &out).await
        }
        Command::Research { company, out } => {
            let out = out.unwrap_or_else(|| PathBuf::from(&config.runs_file));
            cli::research_once(&enrichment, &company, &out).await
        }
    }
}

async fn serve(config: &Config, enrichment: EnrichmentClient) -> Result<()> {
    let app = build_router(AppState { enrichment })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::enrichment::EnrichmentClient;
use crate::pipeline::orchestrator::{run_pipeline, PipelineInput, RunOptions};
use crate::pipeline::runs::{append_run, RunRecord};

#[derive(Parser, Debug)]
#[command(name = "hireme-api")]
#[command(version, about = "Interview preparation backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Run the full pipeline once against a local résumé and log the output
    Run {
        /// Path to the résumé PDF
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job_url: String,
        /// Interviewer's LinkedIn profile URL
        #[arg(long)]
        linkedin: String,
        /// Also run company research and LeetCode selection
        #[arg(long)]
        research: bool,
        /// Run log to append to (defaults to RUNS_FILE)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Research a company and pick LeetCode problems for it
    Research {
        #[arg(long)]
        company: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub async fn run_once(
    client: &EnrichmentClient,
    resume: &Path,
    job_url: String,
    linkedin_url: String,
    research: bool,
    out: &Path,
) -> Result<()> {
    let document = tokio::fs::read(resume)
        .await
        .with_context(|| format!("Failed to read {}", resume.display()))?;

    let run_id = Uuid::new_v4();
    let input = PipelineInput {
        document: Bytes::from(document),
        job_url,
        linkedin_url,
    };
    let output = run_pipeline(client, input, RunOptions { research }, run_id).await?;
    info!(
        "Run {run_id} complete for {}: fit score {}/100",
        output.company_name, output.fit_score.overall_fit_score
    );

    append_run(out, &RunRecord::new(run_id, &output)?)?;
    Ok(())
}

pub async fn research_once(client: &EnrichmentClient, company: &str, out: &Path) -> Result<()> {
    let run_id = Uuid::new_v4();
    let research = client.company_research(company).await?;
    let problems = client.get_leetcode(&research, company).await?;
    info!("Research for {company}: {} leetcode problems", problems.len());

    let output = json!({
        "company_name": company,
        "company_data": research,
        "leetcode_problems": problems,
    });
    append_run(out, &RunRecord::new(run_id, &output)?)?;
    Ok(())
}

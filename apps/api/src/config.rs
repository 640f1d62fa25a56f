use anyhow::{Context, Result};

const DEFAULT_PARALLEL_API_URL: &str = "https://api.parallel.ai";
const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com";

/// Application configuration loaded from environment variables.
/// Startup fails if either provider key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub parallel_api_key: String,
    pub parallel_api_url: String,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub runs_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            parallel_api_key: require_env("PARALLEL_API_KEY")?,
            parallel_api_url: env_or("PARALLEL_API_URL", DEFAULT_PARALLEL_API_URL),
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: env_or("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            runs_file: env_or("RUNS_FILE", "runs.json"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

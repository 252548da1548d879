use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external analysis backend. Required unless the mock
    /// client is enabled.
    pub analysis_api_url: String,
    /// Swap the real analysis backend for the canned mock client.
    pub use_mock_analysis: bool,
    /// Which category taxonomy the export uses: `five-way` or `three-way`.
    pub category_taxonomy: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let use_mock_analysis = std::env::var("USE_MOCK_ANALYSIS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let analysis_api_url = if use_mock_analysis {
            std::env::var("ANALYSIS_API_URL").unwrap_or_default()
        } else {
            require_env("ANALYSIS_API_URL")?
        };

        Ok(Config {
            analysis_api_url,
            use_mock_analysis,
            category_taxonomy: std::env::var("CATEGORY_TAXONOMY")
                .unwrap_or_else(|_| "five-way".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

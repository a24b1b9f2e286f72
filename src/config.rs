use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// SerpAPI key used to authenticate every search request
    pub serpapi_key: String,
    /// Search endpoint; overridable so tests can point at a mock server
    pub endpoint: String,
    /// How many results to request per query
    pub target_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory CSV files are written to, relative to the working directory
    pub directory: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            search: SearchConfig {
                serpapi_key: env::var("SERPAPI_KEY")
                    .context("SerpAPI key is missing. Set it via the SERPAPI_KEY environment variable")?,
                endpoint: env::var("SERPAPI_ENDPOINT")
                    .unwrap_or_else(|_| crate::search::SERPAPI_ENDPOINT.to_string()),
                target_results: env::var("RESULT_TARGET")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()?,
            },
            output: OutputConfig {
                directory: env::var("RESULTS_DIR").unwrap_or_else(|_| "research_results".to_string()),
            },
        })
    }
}

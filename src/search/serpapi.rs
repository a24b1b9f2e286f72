//! SerpAPI Client
//!
//! Fetches Google Scholar results through SerpAPI:
//! - One GET request per page of up to 10 organic results
//! - Sequential pagination until the target count is reached or the
//!   provider runs out of results
//!
//! ## Failure policy
//!
//! A page fetch reports exactly one of three outcomes: decoded JSON on
//! HTTP 200, [`SearchError::Http`] for any other status, or
//! [`SearchError::Transport`] for network/decode failures. Pagination
//! stops on the first failed page and keeps whatever was accumulated
//! so far; the error never escapes the pagination loop.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;

/// Default SerpAPI search endpoint
pub const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search";

/// Results per page requested from the provider
pub const PAGE_SIZE: usize = 10;

/// Errors that can occur during a single page fetch
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request returned HTTP {0}")]
    Http(StatusCode),

    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// SerpAPI client for Google Scholar search
pub struct SerpApiClient {
    http: Client,
    api_key: String,
    base_url: String,
    page_size: usize,
}

impl SerpApiClient {
    /// Create a new SerpAPI client against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: SERPAPI_ENDPOINT.to_string(),
            page_size: PAGE_SIZE,
        }
    }

    /// Configure client from config
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.serpapi_key.clone()).with_base_url(config.endpoint.clone())
    }

    /// Override the search endpoint (mock servers in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-page result count
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fetch a single page of results at the given offset.
    ///
    /// Returns the decoded response body on HTTP 200. Any other status
    /// maps to `SearchError::Http`; connection, timeout, and decode
    /// failures map to `SearchError::Transport`.
    pub async fn fetch_page(&self, query: &str, start: usize) -> Result<Value, SearchError> {
        let num = self.page_size.to_string();
        let start_param = start.to_string();
        let params = [
            ("engine", "google_scholar"),
            ("q", query),
            ("api_key", self.api_key.as_str()),
            ("num", num.as_str()),
            ("start", start_param.as_str()),
        ];

        let response = self.http.get(&self.base_url).query(&params).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::Http(status));
        }

        let body = response.json::<Value>().await?;
        debug!(start, "Scholar page received");
        Ok(body)
    }

    /// Search Google Scholar, paginating until `target` results have
    /// been requested.
    ///
    /// Pages are fetched sequentially in batches of [`PAGE_SIZE`]. A
    /// short page means the provider has no more results; a failed
    /// page ends pagination the same way, keeping partial results.
    /// The final page may push the accumulator past `target` since the
    /// provider is always asked for a full page.
    pub async fn search_scholar(&self, query: &str, target: usize) -> Vec<Value> {
        info!(query = %query, target, "Searching Google Scholar via SerpAPI");

        let mut all_results = Vec::new();
        let mut start = 0;

        while start < target {
            let body = match self.fetch_page(query, start).await {
                Ok(body) => body,
                Err(SearchError::Http(status)) => {
                    warn!(%status, start, "Scholar page returned an error status, keeping partial results");
                    break;
                }
                Err(SearchError::Transport(e)) => {
                    warn!(error = %e, start, "Scholar page fetch failed, keeping partial results");
                    break;
                }
            };

            let items = body
                .get("organic_results")
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();

            let count = items.len();
            all_results.extend(items);

            if count < self.page_size {
                break;
            }
            start += self.page_size;
        }

        info!(count = all_results.len(), "Google Scholar search completed");
        all_results
    }
}

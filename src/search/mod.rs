//! Search Module
//!
//! Google Scholar search through SerpAPI. One client handles both the
//! single-page fetch and the sequential pagination loop on top of it.

pub mod serpapi;

pub use serpapi::{SerpApiClient, SearchError, PAGE_SIZE, SERPAPI_ENDPOINT};

// Scholar Harvest - Google Scholar result harvesting CLI

pub mod config;
pub mod types;
pub mod models;
pub mod search;   // Search API (SerpAPI for Google Scholar)
pub mod export;   // CSV export of harvested results
pub mod repl;     // Interactive query loop

// Re-exports for convenience
pub use config::Config;
pub use types::{AppError, AppResult};

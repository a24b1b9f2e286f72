//! CSV Export
//!
//! Writes one CSV file per non-empty query. Duplicate titles are
//! dropped at this stage, first occurrence wins, and the surviving
//! rows get sequential 1-based IDs. The CSV bytes are assembled in
//! memory and written in one shot.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs;
use tracing::info;

use crate::config::OutputConfig;
use crate::models::ResearchRecord;
use crate::types::{AppError, AppResult};

/// Header row of every results file
const CSV_HEADER: [&str; 5] = ["ID", "Type", "Title", "Authors/Inventors", "Link/Patent Number"];

/// Timestamp embedded in filenames, second resolution
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Exporter for harvested research records
pub struct ResultsExporter {
    output_dir: PathBuf,
}

impl ResultsExporter {
    /// Create an exporter writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Configure exporter from config
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.directory)
    }

    /// Ensure the output directory exists
    pub async fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir).await?;
        Ok(())
    }

    /// Save records for a query, deduplicating by title.
    ///
    /// Returns `Ok(None)` without touching the filesystem when there
    /// is nothing to save, otherwise the path of the written file.
    pub async fn save(&self, records: &[ResearchRecord], query: &str) -> AppResult<Option<PathBuf>> {
        if records.is_empty() {
            info!(query = %query, "No results to save, skipping file creation");
            return Ok(None);
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let filename = format!("research_results_{}_{}.csv", query, timestamp);
        let path = self.output_dir.join(filename);

        let bytes = render_csv(records)?;
        fs::write(&path, bytes).await?;

        info!(path = %path.display(), "Results saved");
        Ok(Some(path))
    }

    /// Directory this exporter writes into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Render records to CSV bytes, skipping duplicate titles
fn render_csv(records: &[ResearchRecord]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    let mut seen_titles = HashSet::new();
    let mut next_id: usize = 1;
    for record in records {
        if !seen_titles.insert(record.title.clone()) {
            continue;
        }
        writer.write_record([
            &next_id.to_string(),
            &record.record_type,
            &record.title,
            &record.authors,
            &record.link,
        ])?;
        next_id += 1;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush CSV buffer: {e}")))
}

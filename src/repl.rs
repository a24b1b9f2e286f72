//! Interactive Query Loop
//!
//! Reads keywords from stdin, runs each one through the
//! fetch-format-save pipeline, and prompts again. Typing `exit`
//! (case-insensitive) or closing stdin ends the loop. Queries run
//! strictly one at a time.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::config::Config;
use crate::export::ResultsExporter;
use crate::models::format_results;
use crate::search::SerpApiClient;
use crate::types::AppResult;

/// Run the interactive loop until the operator exits
pub async fn run(config: &Config) -> AppResult<()> {
    let client = SerpApiClient::from_config(&config.search);
    let exporter = ResultsExporter::from_config(&config.output);
    exporter.ensure_dir().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Enter search keyword (or type 'exit' to quit): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed, same as an explicit exit
            debug!("stdin closed, leaving query loop");
            break;
        };

        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") {
            println!("Exiting.");
            break;
        }
        if query.is_empty() {
            println!("Query is empty. Please enter a valid search keyword.");
            continue;
        }

        println!("Fetching Google Scholar results...");
        run_query(&client, &exporter, query, config.search.target_results).await?;
    }

    Ok(())
}

/// Fetch, format, and save results for a single query
pub async fn run_query(
    client: &SerpApiClient,
    exporter: &ResultsExporter,
    query: &str,
    target: usize,
) -> AppResult<()> {
    let raw_results = client.search_scholar(query, target).await;
    println!("Fetched {} Google Scholar results.", raw_results.len());

    let records = format_results(&raw_results);
    match exporter.save(&records, query).await? {
        Some(path) => println!("Results saved to {}", path.display()),
        None => println!("No results found. Skipping file save."),
    }

    Ok(())
}

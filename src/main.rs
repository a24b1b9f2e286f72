use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scholar_harvest::{config::Config, repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scholar_harvest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing SERPAPI_KEY is fatal here
    let config = Config::from_env()?;
    info!(
        directory = %config.output.directory,
        target = config.search.target_results,
        "Configuration loaded"
    );

    repl::run(&config).await?;

    Ok(())
}

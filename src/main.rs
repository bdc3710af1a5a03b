use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draftmeta::config::AppConfig;
use draftmeta::fetch::Fetcher;
use draftmeta::progress::{BarProgress, NullProgress, Progress};
use draftmeta::scrape::Scraper;
use draftmeta::sources::{DdragonClient, UggClient};
use draftmeta::storage::SnapshotWriter;

#[derive(Parser)]
#[command(name = "draftmeta")]
#[command(about = "League of Legends champion statistics scraper")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot output path (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Suppress the progress bar
    #[arg(long)]
    quiet: bool,

    /// Max champions to process (for testing)
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting draftmeta v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let output_path = cli.output.unwrap_or_else(|| config.output_path.clone());

    let catalog = DdragonClient::new(
        Fetcher::new(config.fetcher_config())?,
        config.sources.ddragon_url.clone(),
    );
    let stats = UggClient::new(
        Fetcher::new(config.fetcher_config())?,
        config.sources.ugg_url.clone(),
    );

    let mut scraper = Scraper::new(
        Arc::new(catalog),
        Arc::new(stats),
        SnapshotWriter::new(output_path),
    );
    if let Some(limit) = cli.limit {
        scraper = scraper.with_champion_limit(limit);
    }

    let mut progress: Box<dyn Progress> = if cli.quiet {
        Box::new(NullProgress)
    } else {
        Box::new(BarProgress::new())
    };

    match scraper.run_once(progress.as_mut()).await {
        Ok(result) => {
            println!("\n=== Scrape Results ===");
            println!("Patch:          {}", result.patch);
            println!("Champions:      {}", result.champions);
            println!("Pages fetched:  {}", result.pages_fetched);
            println!("Pages empty:    {}", result.pages_empty);
            println!("Duration:       {:?}", result.duration);
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

//! Paper-Harvest main entry point
//!
//! This is the command-line interface for the proceedings metadata
//! harvester.

use anyhow::Context;
use clap::Parser;
use paper_harvest::config::{load_config_with_hash, validate, Config};
use paper_harvest::crawler::Coordinator;
use paper_harvest::output::{print_statistics, CsvSink, DatasetSink, HarvestStats};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Paper-Harvest: a proceedings metadata harvester
///
/// Fetches a conference proceedings listing page, follows every paper's
/// detail page under a concurrency bound, and writes the extracted
/// metadata (title, authors, abstract, PDF link) to a CSV dataset.
#[derive(Parser, Debug)]
#[command(name = "paper-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Harvest paper metadata from a proceedings listing", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Override the index URL from the config file
    #[arg(long, value_name = "URL")]
    index_url: Option<String>,

    /// Override the dataset output path from the config file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    // Apply CLI overrides and re-validate
    if let Some(index_url) = cli.index_url {
        config.harvest.index_url = index_url;
    }
    if let Some(output) = cli.output {
        config.output.dataset_path = output.display().to_string();
    }
    validate(&config).context("configuration invalid after CLI overrides")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("paper_harvest=info,warn"),
            1 => EnvFilter::new("paper_harvest=debug,info"),
            2 => EnvFilter::new("paper_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &Config) {
    println!("=== Paper-Harvest Dry Run ===\n");

    println!("Harvest:");
    println!("  Index URL: {}", config.harvest.index_url);
    println!(
        "  Max concurrent fetches: {}",
        config.harvest.max_concurrent_fetches
    );
    println!("  Max retries: {}", config.harvest.max_retries);
    println!("  Retry delay: {}ms", config.harvest.retry_delay_ms);

    println!("\nHTTP:");
    println!("  User-Agent: {}", config.http.user_agent);
    println!("  Request timeout: {}s", config.http.request_timeout_secs);
    if !config.http.headers.is_empty() {
        println!("  Extra headers:");
        for (name, value) in &config.http.headers {
            println!("    {}: {}", name, value);
        }
    }

    println!("\nOutput:");
    println!("  Dataset: {}", config.output.dataset_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would harvest {}", config.harvest.index_url);
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config) -> anyhow::Result<()> {
    let sink = CsvSink::new(&config.output.dataset_path);
    let coordinator = Coordinator::new(config)?;

    // Ctrl-C stops dispatching new fetches and abandons in-flight ones
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, stopping harvest");
                cancel.cancel();
            }
        });
    }

    let outcome = coordinator.run_with_cancellation(cancel).await?;

    sink.write(&outcome.records)?;

    let stats = HarvestStats::from_outcome(&outcome);
    print_statistics(&stats);

    Ok(())
}

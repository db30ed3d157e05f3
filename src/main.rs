use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use musicscrape::{Config, SearchOptions, Searcher};

#[derive(Parser)]
#[command(name = "musicscrape")]
#[command(about = "Extract song, album and playlist metadata from Apple Music links")]
#[command(version)]
struct Cli {
    /// Apple Music song, album or playlist link
    url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Attempts per page before giving up (or set MUSICSCRAPE_MAX_ATTEMPTS)
    #[arg(long, env = "MUSICSCRAPE_MAX_ATTEMPTS")]
    max_attempts: Option<u32>,

    /// Base delay between attempts in milliseconds (or set MUSICSCRAPE_RETRY_DELAY_MS)
    #[arg(long, env = "MUSICSCRAPE_RETRY_DELAY_MS")]
    retry_delay_ms: Option<u64>,

    /// User-Agent header sent to the catalog (or set MUSICSCRAPE_USER_AGENT)
    #[arg(long, env = "MUSICSCRAPE_USER_AGENT")]
    user_agent: Option<String>,
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env().context("Failed to load configuration")?;

    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }
    if let Some(delay) = cli.retry_delay_ms {
        config.retry_delay = Duration::from_millis(delay);
    }
    if let Some(user_agent) = &cli.user_agent {
        config.user_agent = user_agent.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let searcher = Searcher::from_config(&config, SearchOptions { verbose: cli.verbose })
        .context("Failed to initialize HTTP client")?;

    let item = searcher
        .search(&cli.url)
        .await
        .with_context(|| format!("Failed to read {}", cli.url))?;

    let Some(item) = item else {
        eprintln!("{}", "No result".yellow());
        std::process::exit(1);
    };

    let json = if cli.compact {
        serde_json::to_string(&item)?
    } else {
        serde_json::to_string_pretty(&item)?
    };
    println!("{}", json);

    Ok(())
}

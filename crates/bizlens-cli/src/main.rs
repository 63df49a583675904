mod inspect;
mod run;
mod sink;

use std::path::PathBuf;

use bizlens_core::{AppConfig, ConfigError};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "bizlens-cli")]
#[command(about = "Bulk website to B2B insight enrichment for CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process the next batch of rows not yet done and write the table out
    Run(RunArgs),
    /// Show columns, the detected website column, and row status counts
    Inspect {
        #[arg(long, short)]
        input: PathBuf,
        /// Number of rows to preview
        #[arg(long, default_value_t = 5)]
        rows: usize,
    },
    /// Print the URLs that would be tried for a site identifier, in order
    Candidates { identifier: String },
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long, short)]
    input: PathBuf,
    /// Defaults to `ai_batch_insights_<unix-seconds>.csv` next to the input
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Overrides auto-detection (`website`, `url`, `domain`, else first column)
    #[arg(long)]
    website_column: Option<String>,
    /// Defaults to `BIZLENS_BATCH_SIZE`
    #[arg(long)]
    batch_size: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(command) => dispatch(command, bizlens_core::load_app_config).await?,
        None => println!("bizlens-cli: pass a subcommand (run, inspect, candidates); see --help"),
    }

    Ok(())
}

/// Only `run` needs the app config, so a bad `BIZLENS_*` value cannot break
/// `inspect` or `candidates`.
async fn dispatch<F>(command: Commands, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match command {
        Commands::Run(args) => {
            let config = load_config()?;
            run::run_command(&config, args).await?;
        }
        Commands::Inspect { input, rows } => inspect::inspect_command(&input, rows)?,
        Commands::Candidates { identifier } => {
            for url in bizlens_scraper::candidate_urls(&identifier) {
                println!("{url}");
            }
        }
    }
    Ok(())
}

/// `RUST_LOG` first, then `BIZLENS_LOG_LEVEL`, then `info`.
fn env_filter() -> EnvFilter {
    let directive = log_directive(
        std::env::var("RUST_LOG").ok(),
        std::env::var("BIZLENS_LOG_LEVEL").ok(),
    );
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn log_directive(rust_log: Option<String>, log_level: Option<String>) -> String {
    [rust_log, log_level]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

#[cfg(test)]
mod tests;

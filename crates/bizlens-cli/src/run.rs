//! `run` command: one batch pass over a CSV table.
//!
//! A missing API key is reported up front but does not stop the run; each
//! row then records the endpoint's rejection in its `error` column.

use std::path::{Path, PathBuf};

use bizlens_core::{
    detect_website_column, export_file_name, read_table_from_path, write_table_to_path,
    AppConfig, Table,
};
use bizlens_insights::{InsightClient, InsightSettings};
use bizlens_pipeline::{run_batch, BatchOptions};
use bizlens_scraper::SiteFetcher;

use crate::sink::TerminalSink;
use crate::RunArgs;

pub(crate) const MISSING_KEY_NOTICE: &str =
    "Missing GROQ_API_KEY: set it in the environment or .env; insight requests will fail until it is provided.";

/// # Errors
///
/// Returns an error if the input cannot be read, the website column cannot
/// be resolved, an HTTP client cannot be built, or the output cannot be
/// written. Per-row failures never surface here.
pub(crate) async fn run_command(config: &AppConfig, args: RunArgs) -> anyhow::Result<()> {
    if !config.has_api_key() {
        eprintln!("{MISSING_KEY_NOTICE}");
        tracing::error!("GROQ_API_KEY is not set");
    }

    let mut table = read_table_from_path(&args.input)?;
    let website_column = resolve_website_column(&table, args.website_column.as_deref())?;

    let fetcher = SiteFetcher::new(config.fetch_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build site fetcher: {e}"))?;
    let insights = InsightClient::new(InsightSettings::from_app_config(config))
        .map_err(|e| anyhow::anyhow!("failed to build insight client: {e}"))?;

    let options = BatchOptions {
        batch_size: args.batch_size.unwrap_or(config.batch_size),
        max_text_chars: config.max_text_chars,
    };

    tracing::info!(
        input = %args.input.display(),
        website_column = %website_column,
        rows = table.len(),
        batch_size = options.batch_size,
        "loaded table"
    );

    let mut sink = TerminalSink::new(std::io::stdout());
    let report = run_batch(
        &mut table,
        &website_column,
        &options,
        &fetcher,
        &insights,
        &mut sink,
    )
    .await;

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, chrono::Utc::now()));
    write_table_to_path(&table, &output)?;

    println!(
        "Batch completed: {} processed, {} skipped, {} remaining. Wrote {}",
        report.processed,
        report.skipped,
        report.remaining,
        output.display()
    );
    Ok(())
}

/// Uses `requested` when given (it must exist), else auto-detects.
pub(crate) fn resolve_website_column(
    table: &Table,
    requested: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(name) = requested {
        table.require_column(name)?;
        return Ok(name.to_string());
    }
    detect_website_column(table)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("input has no columns to read site identifiers from"))
}

/// Export path next to `input`, named with the export timestamp.
pub(crate) fn default_output_path(input: &Path, now: chrono::DateTime<chrono::Utc>) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    dir.join(export_file_name(now))
}

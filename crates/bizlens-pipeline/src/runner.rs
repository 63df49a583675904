//! Batch runner over the rows of a [`Table`].
//!
//! Each call takes up to `batch_size` rows that are not yet `done`, in table
//! order, and drives them one at a time through fetch, extract, and insight
//! request. Results are merged into the table in place. Rows already `done`
//! are never touched, so re-running on an exported table resumes where the
//! last run stopped.

use bizlens_core::{RowStatus, Table};
use bizlens_insights::error_fields;
use bizlens_scraper::{extract_text_with_limit, truncate_chars, MAX_TEXT_CHARS};
use serde_json::Value;

use crate::progress::ProgressSink;
use crate::sources::{InsightSource, PageSource};

/// Characters of extracted text echoed to the progress sink.
pub const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub batch_size: usize,
    pub max_text_chars: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: 50,
            max_text_chars: MAX_TEXT_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Rows that reached `done` in this call.
    pub processed: usize,
    /// Rows marked `skipped` in this call.
    pub skipped: usize,
    /// Rows still not `done` after this call.
    pub remaining: usize,
}

/// Runs one batch pass over `table`.
///
/// Never fails: fetch failures become the `SCRAPE_ERROR` content sent to the
/// model, and insight failures become an `error` field, so a row can reach
/// `done` carrying only an error column. A row with a blank identifier is
/// marked `skipped` without any network call.
pub async fn run_batch<P, I, S>(
    table: &mut Table,
    website_column: &str,
    options: &BatchOptions,
    pages: &P,
    insights: &I,
    sink: &mut S,
) -> BatchReport
where
    P: PageSource,
    I: InsightSource,
    S: ProgressSink,
{
    table.ensure_status_column();

    let selected = table.pending_rows(options.batch_size);
    let total = table.len();
    let mut report = BatchReport::default();

    tracing::info!(
        selected = selected.len(),
        total,
        website_column,
        "starting batch"
    );

    for idx in selected {
        let site = table
            .get(idx, website_column)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        if site.is_empty() {
            tracing::info!(row = idx + 1, "skipping row with blank identifier");
            table.set_status(idx, RowStatus::Skipped);
            report.skipped += 1;
            continue;
        }

        sink.markdown(&format!("## Processing {}/{total} – `{site}`", idx + 1));

        let (content, resolved_url) = match pages.fetch_page(&site).await {
            Ok(page) => (
                extract_text_with_limit(&page.body, options.max_text_chars),
                Some(page.url),
            ),
            Err(e) => {
                tracing::warn!(row = idx + 1, site = %site, error = %e, "site unreachable");
                (e.to_string(), None)
            }
        };

        sink.text(&format!(
            "Using URL: {}",
            resolved_url.as_deref().unwrap_or("Not Found")
        ));
        sink.text(&format!("{}...", truncate_chars(&content, PREVIEW_CHARS)));

        let request_url = resolved_url.as_deref().unwrap_or(&site);
        let fields = match insights.request_insights(request_url, &content).await {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!(row = idx + 1, url = request_url, error = %e, "insight request failed");
                error_fields(&e)
            }
        };

        sink.json(&Value::Object(fields.clone()));

        table.merge_fields(idx, &fields);
        table.set_status(idx, RowStatus::Done);
        report.processed += 1;
    }

    report.remaining = total - table.status_counts().done;

    tracing::info!(
        processed = report.processed,
        skipped = report.skipped,
        remaining = report.remaining,
        "batch complete"
    );

    report
}

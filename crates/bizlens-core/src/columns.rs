use crate::Table;

/// Column names recognized as the website identifier, matched case-insensitively.
const WEBSITE_COLUMN_NAMES: &[&str] = &["website", "url", "domain"];

/// Prefix of the exported file name; the suffix is the export identifier.
pub const EXPORT_FILE_PREFIX: &str = "ai_batch_insights";

/// Picks the column holding site identifiers.
///
/// The first column whose name is `website`, `url`, or `domain` (any case)
/// wins; otherwise the first column. `None` only for a table with no columns.
#[must_use]
pub fn detect_website_column(table: &Table) -> Option<&str> {
    table
        .columns()
        .iter()
        .find(|c| {
            let lower = c.trim().to_lowercase();
            WEBSITE_COLUMN_NAMES.contains(&lower.as_str())
        })
        .or_else(|| table.columns().first())
        .map(String::as_str)
}

/// File name for an export, e.g. `ai_batch_insights_1735689600.csv`.
#[must_use]
pub fn export_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.csv", now.timestamp())
}

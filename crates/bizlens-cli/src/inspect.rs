use std::path::Path;

use bizlens_core::{detect_website_column, read_table_from_path, Table};

pub(crate) fn inspect_command(input: &Path, preview_rows: usize) -> anyhow::Result<()> {
    let table = read_table_from_path(input)?;
    print!("{}", render_summary(&table, preview_rows));
    Ok(())
}

pub(crate) fn render_summary(table: &Table, preview_rows: usize) -> String {
    let counts = table.status_counts();
    let mut out = String::new();

    out.push_str(&format!("Columns: {}\n", table.columns().join(", ")));
    out.push_str(&format!(
        "Website column: {}\n",
        detect_website_column(table).unwrap_or("(none)")
    ));
    out.push_str(&format!(
        "Rows: {} (done {}, skipped {}, pending {})\n",
        table.len(),
        counts.done,
        counts.skipped,
        counts.pending
    ));

    for idx in 0..table.len().min(preview_rows) {
        let Some(row) = table.row(idx) else { break };
        let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
        out.push_str(&format!("{}: {}\n", idx + 1, cells.join(" | ")));
    }
    out
}

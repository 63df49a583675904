//! In-memory table with a growing column set.
//!
//! Rows are stored positionally against a single ordered column list. Adding a
//! column backfills `None` (the null marker) into every existing row, so all
//! rows always share the same shape.

use serde_json::{Map, Value};

use crate::TableError;

/// Name of the per-row lifecycle column.
pub const STATUS_COLUMN: &str = "status";

/// Lifecycle flag gating whether a row is eligible for a batch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// Never visited, or the cell holds something other than a known status.
    Pending,
    Done,
    Skipped,
}

impl RowStatus {
    #[must_use]
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell.map(str::trim) {
            Some("done") => Self::Done,
            Some("skipped") => Self::Skipped,
            _ => Self::Pending,
        }
    }

    /// Cell value written to the status column. `Pending` is the null marker.
    #[must_use]
    pub fn as_cell(self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::Done => Some("done"),
            Self::Skipped => Some("skipped"),
        }
    }
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowStatus::Pending => write!(f, "pending"),
            RowStatus::Done => write!(f, "done"),
            RowStatus::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub done: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Creates an empty table with the given header.
    ///
    /// Duplicate header names get a `.N` suffix so every column name is unique.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for name in columns {
            let name = name.into();
            let unique = table.unique_name(&name);
            table.columns.push(unique);
        }
        table
    }

    fn unique_name(&self, name: &str) -> String {
        if self.column_index(name).is_none() {
            return name.to_string();
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{name}.{n}");
            if self.column_index(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Appends a row. Short rows are padded with nulls, extra cells dropped.
    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) {
        cells.resize(self.columns.len(), None);
        self.rows.push(cells);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&[Option<String>]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] if `name` is not a column.
    pub fn require_column(&self, name: &str) -> Result<usize, TableError> {
        self.column_index(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Returns the index of `name`, appending it (null for every row) if unseen.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(None);
        }
        self.columns.len() - 1
    }

    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Writes one cell, creating the column if needed. Out-of-range rows are ignored.
    pub fn set(&mut self, row: usize, column: &str, value: Option<String>) {
        if row >= self.rows.len() {
            return;
        }
        let col = self.ensure_column(column);
        self.rows[row][col] = value;
    }

    pub fn ensure_status_column(&mut self) {
        self.ensure_column(STATUS_COLUMN);
    }

    #[must_use]
    pub fn status(&self, row: usize) -> RowStatus {
        RowStatus::from_cell(self.get(row, STATUS_COLUMN))
    }

    pub fn set_status(&mut self, row: usize, status: RowStatus) {
        self.set(row, STATUS_COLUMN, status.as_cell().map(str::to_string));
    }

    /// Indices of up to `limit` rows not yet `done`, in table order.
    ///
    /// Rows marked `skipped` are eligible again: a later run may find the
    /// identifier filled in.
    #[must_use]
    pub fn pending_rows(&self, limit: usize) -> Vec<usize> {
        (0..self.rows.len())
            .filter(|&idx| self.status(idx) != RowStatus::Done)
            .take(limit)
            .collect()
    }

    /// Merges every key of `fields` into `row`, growing the column set for
    /// unseen keys.
    pub fn merge_fields(&mut self, row: usize, fields: &Map<String, Value>) {
        for (key, value) in fields {
            self.set(row, key, render_cell(value));
        }
    }

    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for idx in 0..self.rows.len() {
            match self.status(idx) {
                RowStatus::Pending => counts.pending += 1,
                RowStatus::Done => counts.done += 1,
                RowStatus::Skipped => counts.skipped += 1,
            }
        }
        counts
    }
}

/// Renders a JSON insight value as a CSV cell.
///
/// Strings are kept verbatim, arrays of scalars are joined with `"; "`, null
/// stays null, and anything else is written as compact JSON.
#[must_use]
pub fn render_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.iter().all(is_scalar) => Some(
            items
                .iter()
                .filter_map(render_cell)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;

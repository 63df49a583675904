//! CSV import/export for [`Table`].
//!
//! Empty fields read back as null and null cells are written as empty
//! fields, so a table exported by one run can be fed to the next to resume.

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::{Table, TableError};

/// Reads a headered CSV document into a [`Table`].
///
/// Short records are padded with nulls. A record longer than the header is
/// rejected rather than truncated.
///
/// # Errors
///
/// Returns [`TableError::MissingHeader`] for an empty document,
/// [`TableError::RaggedRecord`] for a record with more fields than the
/// header, and [`TableError::Csv`] for malformed input.
pub fn read_table<R: Read>(reader: R) -> Result<Table, TableError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(TableError::MissingHeader);
    }

    let mut table = Table::new(headers.iter().map(|h| h.trim().to_string()));
    for record in csv_reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(TableError::RaggedRecord {
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let cells = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        table.push_row(cells);
    }
    Ok(table)
}

/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be opened, otherwise as
/// [`read_table`].
pub fn read_table_from_path(path: &Path) -> Result<Table, TableError> {
    let file = std::fs::File::open(path).map_err(|e| TableError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    read_table(file)
}

/// Writes `table` as CSV: header row first, nulls as empty fields.
///
/// # Errors
///
/// Returns [`TableError::Csv`] if a record cannot be written or flushed.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), TableError> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(table.columns())?;
    for idx in 0..table.len() {
        if let Some(row) = table.row(idx) {
            csv_writer.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
    }
    csv_writer.flush().map_err(|e| TableError::Csv(e.into()))?;
    Ok(())
}

/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be created, otherwise as
/// [`write_table`].
pub fn write_table_to_path(table: &Table, path: &Path) -> Result<(), TableError> {
    let file = std::fs::File::create(path).map_err(|e| TableError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    write_table(table, file)
}

//! Shared plumbing for the CSV-backed tables.
//!
//! Every operation opens the file, does one full read or write pass and
//! closes it before returning; there is no batching across operations.

use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::Path;

/// Create the table file with its header row if it does not exist yet.
/// Never touches an existing file.
pub(crate) fn create_if_missing(path: &Path, headers: &[&str]) -> AppResult<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(headers)?;
    wtr.flush()?;
    Ok(())
}

/// Read all data rows (everything after the header) in physical order.
///
/// An empty file counts as a table with zero data rows. A non-empty file
/// whose first cell does not match the expected header is rejected rather
/// than silently decoded as data.
pub(crate) fn read_rows(path: &Path, first_header: &str) -> AppResult<Vec<StringRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = rdr.records();

    match records.next() {
        None => return Ok(Vec::new()),
        Some(header) => {
            let header = header?;
            if header.get(0).map(str::trim) != Some(first_header) {
                return Err(AppError::BadHeader(path.display().to_string()));
            }
        }
    }

    let mut rows = Vec::new();
    for rec in records {
        rows.push(rec?);
    }
    Ok(rows)
}

/// Rewrite the whole table: header first, then the given rows.
pub(crate) fn write_rows(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// All cells of a record as owned strings, shape preserved.
pub(crate) fn to_cells(rec: &StringRecord) -> Vec<String> {
    rec.iter().map(str::to_string).collect()
}

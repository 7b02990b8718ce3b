use crate::errors::AppResult;
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Write one table (header plus rows) as CSV.
pub(crate) fn export_csv(headers: &[&str], rows: &[Vec<String>], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

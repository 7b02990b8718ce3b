use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append one line to the operations log.
/// Callers treat failures as non-blocking: a lost log line never aborts the
/// operation it describes.
pub fn oplog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let now = Local::now().to_rfc3339();

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}\t{}\t{}\t{}", now, operation, target, message)?;

    Ok(())
}

/// Read the whole operations log, newest line last.
pub fn read_log(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub(crate) fn export_json<T: Serialize>(data: &T, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(data).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}

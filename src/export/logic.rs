//! High-level export flow: gather the requested table, check the target
//! file, dispatch on format.

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::{
    ManagerExport, manager_to_row, roster_headers, shift_headers, shift_to_row, shifts_to_exports,
};
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::store::roster::RosterStore;
use crate::store::shifts::ShiftStore;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        shifts: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        if shifts {
            let store = ShiftStore::new(&cfg.shifts_file);
            store.ensure_initialized()?;
            let exports = shifts_to_exports(&store.load_all()?);
            let rows: Vec<Vec<String>> = exports.iter().map(shift_to_row).collect();

            match format {
                ExportFormat::Csv => export_csv(&shift_headers(), &rows, &path),
                ExportFormat::Json => export_json(&exports, &path),
                ExportFormat::Xlsx => export_xlsx(&shift_headers(), &rows, &path),
            }
        } else {
            let store = RosterStore::new(&cfg.roster_file);
            store.ensure_initialized()?;
            let exports: Vec<ManagerExport> = store
                .load_all()?
                .iter()
                .map(ManagerExport::from_manager)
                .collect();
            let rows: Vec<Vec<String>> = exports.iter().map(manager_to_row).collect();

            match format {
                ExportFormat::Csv => export_csv(&roster_headers(), &rows, &path),
                ExportFormat::Json => export_json(&exports, &path),
                ExportFormat::Xlsx => export_xlsx(&roster_headers(), &rows, &path),
            }
        }
    }
}

//! The shift window table: one data row per (day, shift type) pair that has
//! at least one bound set. Saving is replace-all; pairs with both bounds
//! absent are never written, so loading never sees them either.

use super::table;
use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use crate::models::hours::HourRange;
use crate::models::shift::{ShiftPlan, ShiftType};
use std::path::{Path, PathBuf};

pub const SHIFT_HEADERS: [&str; 4] = ["Day", "ShiftType", "StartHour", "EndHour"];

pub struct ShiftStore {
    path: PathBuf,
}

impl ShiftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the table with its header row if missing. Idempotent.
    pub fn ensure_initialized(&self) -> AppResult<()> {
        table::create_if_missing(&self.path, &SHIFT_HEADERS)
    }

    /// Load the full plan. Rows with an unknown day or shift type label are
    /// rejected; rows with both hour cells blank are skipped (they would not
    /// survive a save anyway).
    pub fn load_all(&self) -> AppResult<ShiftPlan> {
        let mut plan = ShiftPlan::default();

        for rec in table::read_rows(&self.path, "Day")? {
            let cell = |i: usize| rec.get(i).unwrap_or("").trim();

            let day = Day::from_label(cell(0))
                .ok_or_else(|| AppError::InvalidDay(cell(0).to_string()))?;
            let shift = ShiftType::from_label(cell(1))
                .ok_or_else(|| AppError::InvalidShiftType(cell(1).to_string()))?;

            let hours = HourRange::new(parse_hour_cell(cell(2)), parse_hour_cell(cell(3)));
            if !hours.is_off() {
                plan.set(day, shift, hours);
            }
        }

        Ok(plan)
    }

    /// Replace every data row with the pairs currently in the plan.
    pub fn save_all(&self, plan: &ShiftPlan) -> AppResult<()> {
        let rows: Vec<Vec<String>> = plan
            .iter()
            .map(|(day, shift, hours)| {
                vec![
                    day.label().to_string(),
                    shift.to_cell().to_string(),
                    hour_cell(hours.start),
                    hour_cell(hours.end),
                ]
            })
            .collect();

        table::write_rows(&self.path, &SHIFT_HEADERS, &rows)
    }
}

fn parse_hour_cell(cell: &str) -> Option<u8> {
    if cell.is_empty() {
        return None;
    }
    cell.parse().ok()
}

fn hour_cell(hour: Option<u8>) -> String {
    hour.map(|h| h.to_string()).unwrap_or_default()
}

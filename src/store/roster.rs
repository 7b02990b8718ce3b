//! The roster table: one data row per manager.
//!
//! Column layout is fixed and order matters: `ID, Name, Role, Gender`, then
//! `<Day>_start, <Day>_end` for each day Mon..Sun. Rows are addressed by
//! [`RowIndex`]; records themselves never carry their position.

use super::RowIndex;
use super::table;
use crate::errors::{AppError, AppResult};
use crate::models::availability::Availability;
use crate::models::day::Day;
use crate::models::gender::Gender;
use crate::models::hours::HourRange;
use crate::models::manager::{Manager, ManagerId};
use crate::models::role::Role;
use csv::StringRecord;
use std::path::{Path, PathBuf};

pub const ROSTER_HEADERS: [&str; 18] = [
    "ID",
    "Name",
    "Role",
    "Gender",
    "Mon_start",
    "Mon_end",
    "Tue_start",
    "Tue_end",
    "Wed_start",
    "Wed_end",
    "Thu_start",
    "Thu_end",
    "Fri_start",
    "Fri_end",
    "Sat_start",
    "Sat_end",
    "Sun_start",
    "Sun_end",
];

pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the table with its header row if missing. Idempotent.
    pub fn ensure_initialized(&self) -> AppResult<()> {
        table::create_if_missing(&self.path, &ROSTER_HEADERS)
    }

    /// Load every manager, in physical row order. A table with only the
    /// header row yields an empty list.
    pub fn load_all(&self) -> AppResult<Vec<Manager>> {
        let rows = table::read_rows(&self.path, "ID")?;
        Ok(rows.iter().map(decode_row).collect())
    }

    /// Append (`row == None`) or overwrite all columns of an existing row.
    pub fn upsert(&self, row: Option<RowIndex>, manager: &Manager) -> AppResult<()> {
        let mut rows: Vec<Vec<String>> = table::read_rows(&self.path, "ID")?
            .iter()
            .map(table::to_cells)
            .collect();

        match row {
            None => rows.push(encode_row(manager)),
            Some(RowIndex(i)) => {
                if i == 0 || i > rows.len() {
                    return Err(AppError::RowOutOfRange(i));
                }
                rows[i - 1] = encode_row(manager);
            }
        }

        table::write_rows(&self.path, &ROSTER_HEADERS, &rows)
    }

    /// Remove exactly one data row; all later rows shift up by one.
    pub fn delete(&self, row: RowIndex) -> AppResult<()> {
        let mut rows: Vec<Vec<String>> = table::read_rows(&self.path, "ID")?
            .iter()
            .map(table::to_cells)
            .collect();

        let RowIndex(i) = row;
        if i == 0 || i > rows.len() {
            return Err(AppError::RowOutOfRange(i));
        }
        rows.remove(i - 1);

        table::write_rows(&self.path, &ROSTER_HEADERS, &rows)
    }
}

/// Next free integer ID: one greater than the largest numeric ID found,
/// or 1 when there is none. Non-numeric ID cells are skipped.
pub fn next_id(existing: &[Manager]) -> u32 {
    existing
        .iter()
        .filter_map(|m| m.id.numeric())
        .max()
        .unwrap_or(0)
        + 1
}

fn decode_row(rec: &StringRecord) -> Manager {
    let cell = |i: usize| rec.get(i).unwrap_or("").trim();

    let mut availability = Availability::default();
    for day in Day::ALL {
        let col = 4 + day.index() * 2;
        let hours = HourRange::new(parse_hour_cell(cell(col)), parse_hour_cell(cell(col + 1)));
        availability.set(day, hours);
    }

    Manager {
        id: ManagerId::from_cell(cell(0)),
        name: cell(1).to_string(),
        // Unknown labels fall back to the first choice, like the form did.
        role: Role::from_label(cell(2)).unwrap_or(Role::Admin),
        gender: Gender::from_code(cell(3)).unwrap_or(Gender::Male),
        availability,
    }
}

fn encode_row(m: &Manager) -> Vec<String> {
    let mut cells = vec![
        m.id.as_str().to_string(),
        m.name.clone(),
        m.role.to_cell().to_string(),
        m.gender.to_cell().to_string(),
    ];

    for (_, hours) in m.availability.iter() {
        cells.push(hour_cell(hours.start));
        cells.push(hour_cell(hours.end));
    }

    cells
}

/// Blank or unparseable numeric cells load as absent, never as zero.
fn parse_hour_cell(cell: &str) -> Option<u8> {
    if cell.is_empty() {
        return None;
    }
    cell.parse().ok()
}

fn hour_cell(hour: Option<u8>) -> String {
    hour.map(|h| h.to_string()).unwrap_or_default()
}

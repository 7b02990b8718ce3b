//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::day::Day;
use std::io;
use thiserror::Error;

/// Rejections produced by the form validation step, before anything is
/// written to the store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Unknown role '{0}'. Use one of: admin, shift, area")]
    UnknownRole(String),

    #[error("Unknown gender '{0}'. Use M or F")]
    UnknownGender(String),

    #[error("{day}: hours must be integers 0-23 or empty (got '{value}')")]
    InvalidHour { day: Day, value: String },

    #[error("{day}: hour {hour} is out of range 0-23")]
    HourOutOfRange { day: Day, hour: i64 },

    #[error("{day}: start hour {start} cannot be greater than end hour {end}")]
    StartAfterEnd { day: Day, start: u8, end: u8 },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Table storage
    // ---------------------------
    #[error("Table error: {0}")]
    Table(#[from] csv::Error),

    #[error("Row {0} does not exist in the table")]
    RowOutOfRange(usize),

    #[error("Malformed header in table '{0}'")]
    BadHeader(String),

    // ---------------------------
    // User input
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid day label: {0}")]
    InvalidDay(String),

    #[error("Invalid shift type: {0}")]
    InvalidShiftType(String),

    #[error("Invalid hour range '{0}'. Use forms like 9-17, 9-, -17 or 'off'")]
    InvalidHourRange(String),

    // ---------------------------
    // Session / lookup
    // ---------------------------
    #[error("No manager with ID {0}")]
    NoSuchManager(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

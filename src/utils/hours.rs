//! Parsing of hour-range specs given on the command line.
//!
//! Accepted forms: `9-17`, `9-` (start only), `-17` (end only), a bare `9`
//! (start only), and `off` / `-` / empty for no hours at all.

use crate::errors::{AppError, AppResult};
use crate::models::hours::HourRange;

/// Split a range spec into its raw start/end fields, untouched except for
/// trimming. Validation of the field contents happens later.
pub fn split_range(spec: &str) -> (String, String) {
    let text = spec.trim();
    if text.is_empty() || text == "-" || text.eq_ignore_ascii_case("off") {
        return (String::new(), String::new());
    }

    match text.split_once('-') {
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// Parse and validate a range spec in one step, for callers that do not go
/// through the roster form (shift windows).
pub fn parse_range(spec: &str) -> AppResult<HourRange> {
    let (start_raw, end_raw) = split_range(spec);

    let start = parse_bound(&start_raw, spec)?;
    let end = parse_bound(&end_raw, spec)?;

    if let (Some(s), Some(e)) = (start, end)
        && s > e
    {
        return Err(AppError::InvalidHourRange(spec.trim().to_string()));
    }

    Ok(HourRange::new(start, end))
}

fn parse_bound(raw: &str, spec: &str) -> AppResult<Option<u8>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let hour: i64 = raw
        .parse()
        .map_err(|_| AppError::InvalidHourRange(spec.trim().to_string()))?;

    if !(0..=23).contains(&hour) {
        return Err(AppError::InvalidHourRange(spec.trim().to_string()));
    }

    Ok(Some(hour as u8))
}

pub mod log;
pub mod roster;
pub mod shifts;
pub mod table;

/// 1-based position among the data rows of a table (the header row is not
/// counted). Valid only until the next mutation: deleting a row shifts every
/// later row up by one, so callers reload before trusting a cached index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowIndex(pub usize);

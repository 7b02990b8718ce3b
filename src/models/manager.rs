use super::availability::Availability;
use super::gender::Gender;
use super::role::Role;
use serde::Serialize;
use std::fmt;

/// Stable manager identifier.
///
/// IDs are assigned as integers, but the backing table can be edited by hand,
/// so the raw cell text is kept verbatim. Allocation only considers IDs that
/// parse as numbers; everything else is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ManagerId(String);

impl ManagerId {
    pub fn from_cell(cell: &str) -> Self {
        Self(cell.trim().to_string())
    }

    pub fn from_number(n: u32) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of this ID, if it has one.
    pub fn numeric(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One roster entry. Physical row position is deliberately not part of the
/// record; the store reconciles cache order with row order on every reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manager {
    pub id: ManagerId,
    pub name: String,
    pub role: Role,
    pub gender: Gender,
    pub availability: Availability,
}

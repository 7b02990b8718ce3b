use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    Shift,
    Area,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Shift => "shift",
            Role::Area => "area",
        }
    }

    /// Convert enum → table cell
    pub fn to_cell(&self) -> &'static str {
        self.label()
    }

    /// Convert table cell / CLI input → enum
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "shift" => Some(Role::Shift),
            "area" => Some(Role::Area),
            _ => None,
        }
    }
}

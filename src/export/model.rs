use crate::models::manager::Manager;
use crate::models::shift::ShiftPlan;
use crate::store::roster::ROSTER_HEADERS;
use crate::store::shifts::SHIFT_HEADERS;
use serde::Serialize;

/// Flat export view of one roster entry.
#[derive(Serialize, Clone, Debug)]
pub struct ManagerExport {
    pub id: String,
    pub name: String,
    pub role: String,
    pub gender: String,
    pub days: Vec<DayExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub day: String,
    pub start: Option<u8>,
    pub end: Option<u8>,
}

impl ManagerExport {
    pub fn from_manager(m: &Manager) -> Self {
        Self {
            id: m.id.as_str().to_string(),
            name: m.name.clone(),
            role: m.role.label().to_string(),
            gender: m.gender.code().to_string(),
            days: m
                .availability
                .iter()
                .map(|(day, hours)| DayExport {
                    day: day.label().to_string(),
                    start: hours.start,
                    end: hours.end,
                })
                .collect(),
        }
    }
}

/// Export view of one configured shift window.
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    pub day: String,
    pub shift_type: String,
    pub start_hour: Option<u8>,
    pub end_hour: Option<u8>,
}

pub(crate) fn roster_headers() -> Vec<&'static str> {
    ROSTER_HEADERS.to_vec()
}

pub(crate) fn shift_headers() -> Vec<&'static str> {
    SHIFT_HEADERS.to_vec()
}

/// One table row per manager, in the roster column layout.
pub(crate) fn manager_to_row(e: &ManagerExport) -> Vec<String> {
    let mut row = vec![
        e.id.clone(),
        e.name.clone(),
        e.role.clone(),
        e.gender.clone(),
    ];
    for day in &e.days {
        row.push(opt_cell(day.start));
        row.push(opt_cell(day.end));
    }
    row
}

pub(crate) fn shift_to_row(s: &ShiftExport) -> Vec<String> {
    vec![
        s.day.clone(),
        s.shift_type.clone(),
        opt_cell(s.start_hour),
        opt_cell(s.end_hour),
    ]
}

pub(crate) fn shifts_to_exports(plan: &ShiftPlan) -> Vec<ShiftExport> {
    plan.iter()
        .map(|(day, shift, hours)| ShiftExport {
            day: day.label().to_string(),
            shift_type: shift.label().to_string(),
            start_hour: hours.start,
            end_hour: hours.end,
        })
        .collect()
}

fn opt_cell(v: Option<u8>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

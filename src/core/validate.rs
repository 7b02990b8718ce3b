//! Form validation: raw field text in, typed profile out.
//! Nothing here touches the store; a draft that fails validation causes
//! zero writes.

use crate::errors::ValidationError;
use crate::models::availability::Availability;
use crate::models::day::Day;
use crate::models::gender::Gender;
use crate::models::hours::HourRange;
use crate::models::manager::Manager;
use crate::models::role::Role;

/// Raw hour fields for one day, exactly as typed. Both blank = off.
#[derive(Debug, Clone, Default)]
pub struct DayField {
    pub start: String,
    pub end: String,
}

/// A candidate roster entry as entered by the user. Carries no ID: IDs are
/// assigned on add and preserved on update, never taken from input.
#[derive(Debug, Clone, Default)]
pub struct ManagerDraft {
    pub name: String,
    pub role: String,
    pub gender: String,
    pub days: [DayField; 7],
}

impl ManagerDraft {
    /// Prefill a draft from an existing record, for partial edits.
    pub fn from_manager(m: &Manager) -> Self {
        let mut days: [DayField; 7] = Default::default();
        for (day, hours) in m.availability.iter() {
            days[day.index()] = DayField {
                start: hour_field(hours.start),
                end: hour_field(hours.end),
            };
        }

        Self {
            name: m.name.clone(),
            role: m.role.label().to_string(),
            gender: m.gender.code().to_string(),
            days,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DayField {
        &mut self.days[day.index()]
    }
}

/// The validated fields of a draft, ready to be joined with an ID.
#[derive(Debug, Clone)]
pub struct ManagerProfile {
    pub name: String,
    pub role: Role,
    pub gender: Gender,
    pub availability: Availability,
}

pub fn validate(draft: &ManagerDraft) -> Result<ManagerProfile, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let role = Role::from_label(&draft.role)
        .ok_or_else(|| ValidationError::UnknownRole(draft.role.trim().to_string()))?;
    let gender = Gender::from_code(&draft.gender)
        .ok_or_else(|| ValidationError::UnknownGender(draft.gender.trim().to_string()))?;

    let mut availability = Availability::default();
    for day in Day::ALL {
        let field = &draft.days[day.index()];
        let start = parse_hour_field(day, &field.start)?;
        let end = parse_hour_field(day, &field.end)?;

        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(ValidationError::StartAfterEnd {
                day,
                start: s,
                end: e,
            });
        }

        availability.set(day, HourRange::new(start, end));
    }

    Ok(ManagerProfile {
        name: name.to_string(),
        role,
        gender,
        availability,
    })
}

fn parse_hour_field(day: Day, raw: &str) -> Result<Option<u8>, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let hour: i64 = text.parse().map_err(|_| ValidationError::InvalidHour {
        day,
        value: text.to_string(),
    })?;

    if !(0..=23).contains(&hour) {
        return Err(ValidationError::HourOutOfRange { day, hour });
    }

    Ok(Some(hour as u8))
}

fn hour_field(hour: Option<u8>) -> String {
    hour.map(|h| h.to_string()).unwrap_or_default()
}

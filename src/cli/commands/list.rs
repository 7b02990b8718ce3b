use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::RosterSession;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::day::Day;
use crate::models::role::Role;
use crate::store::roster::RosterStore;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { role, day } = cmd {
        let role_filter = match role {
            Some(r) => Some(
                Role::from_label(r)
                    .ok_or_else(|| ValidationError::UnknownRole(r.clone()))
                    .map_err(AppError::from)?,
            ),
            None => None,
        };

        let day_filter = match day {
            Some(d) => {
                Some(Day::from_label(d).ok_or_else(|| AppError::InvalidDay(d.clone()))?)
            }
            None => None,
        };

        let store = RosterStore::new(&cfg.roster_file);
        let session = RosterSession::open(store)?;

        let mut table = Table::new(vec![
            "ID", "Name", "Role", "Gender", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun",
        ]);

        let mut shown = 0;
        for manager in session.managers() {
            if let Some(wanted) = role_filter
                && manager.role != wanted
            {
                continue;
            }
            if let Some(wanted) = day_filter
                && manager.availability.get(wanted).is_off()
            {
                continue;
            }

            let mut row = vec![
                manager.id.to_string(),
                manager.name.clone(),
                manager.role.label().to_string(),
                manager.gender.code().to_string(),
            ];
            for (_, hours) in manager.availability.iter() {
                row.push(hours.to_string());
            }

            table.add_row(row);
            shown += 1;
        }

        if shown == 0 {
            info("No managers to show.");
        } else {
            print!("{}", table.render());
        }
    }

    Ok(())
}

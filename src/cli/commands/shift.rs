use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::shifts::ShiftPlanner;
use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use crate::models::shift::ShiftType;
use crate::store::log;
use crate::store::shifts::ShiftStore;
use crate::ui::messages::{info, success};
use crate::utils::hours::parse_range;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { action } = cmd {
        let store = ShiftStore::new(&cfg.shifts_file);
        let mut planner = ShiftPlanner::open(store)?;

        match action {
            ShiftAction::Set { day, shift, hours } => {
                let day = parse_day(day)?;
                let shift = parse_shift(shift)?;
                let range = parse_range(hours)?;

                planner.set(day, shift, range)?;

                let target = format!("{} {}", day, shift);
                if let Err(e) = log::oplog(
                    &cfg.log_file(),
                    "shift-set",
                    &target,
                    &format!("Window set to {}", range),
                ) {
                    eprintln!("⚠️ Failed to write operations log: {}", e);
                }

                if range.is_off() {
                    success(format!("Cleared the {} {} window.", day, shift));
                } else {
                    success(format!("Set the {} {} window to {}.", day, shift, range));
                }
            }

            ShiftAction::Clear { day, shift } => {
                let day = parse_day(day)?;
                let shift = parse_shift(shift)?;

                if planner.clear(day, shift)? {
                    let target = format!("{} {}", day, shift);
                    if let Err(e) =
                        log::oplog(&cfg.log_file(), "shift-clear", &target, "Window cleared")
                    {
                        eprintln!("⚠️ Failed to write operations log: {}", e);
                    }
                    success(format!("Cleared the {} {} window.", day, shift));
                } else {
                    info(format!("No window set for {} {}.", day, shift));
                }
            }

            ShiftAction::List => {
                if planner.plan().is_empty() {
                    info("No shift windows configured.");
                    return Ok(());
                }

                let mut table = Table::new(vec!["Day", "Shift", "Hours"]);
                for (day, shift, hours) in planner.plan().iter() {
                    table.add_row(vec![
                        day.to_string(),
                        shift.to_string(),
                        hours.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}

fn parse_day(s: &str) -> AppResult<Day> {
    Day::from_label(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
}

fn parse_shift(s: &str) -> AppResult<ShiftType> {
    ShiftType::from_label(s).ok_or_else(|| AppError::InvalidShiftType(s.to_string()))
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::RosterSession;
use crate::errors::{AppError, AppResult};
use crate::store::roster::RosterStore;
use crate::utils::describe_role;
use crate::utils::formatting::bold;

/// Print the full profile of one manager.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = RosterStore::new(&cfg.roster_file);
        let mut session = RosterSession::open(store)?;

        let index = session
            .select_by_id(id)
            .ok_or_else(|| AppError::NoSuchManager(id.clone()))?;
        let manager = session
            .get(index)
            .ok_or_else(|| AppError::NoSuchManager(id.clone()))?;

        let (role_desc, _) = describe_role(manager.role.label());

        println!(
            "{}",
            bold(&format!("{} (ID {})", manager.name, manager.id))
        );
        println!("Role   : {}", role_desc);
        println!("Gender : {}", manager.gender.code());
        println!("Availability:");
        for (day, hours) in manager.availability.iter() {
            println!("  {} : {}", day, hours);
        }
    }

    Ok(())
}

use super::apply_day_specs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::RosterSession;
use crate::core::validate::ManagerDraft;
use crate::errors::AppResult;
use crate::store::log;
use crate::store::roster::RosterStore;
use crate::ui::messages::success;

/// Add a manager to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        role,
        gender,
        mon,
        tue,
        wed,
        thu,
        fri,
        sat,
        sun,
    } = cmd
    {
        //
        // 1. Build the draft (role/gender fall back to the configured defaults)
        //
        let mut draft = ManagerDraft {
            name: name.clone(),
            role: role.clone().unwrap_or_else(|| cfg.default_role.clone()),
            gender: gender.clone().unwrap_or_else(|| cfg.default_gender.clone()),
            ..Default::default()
        };
        apply_day_specs(&mut draft, [mon, tue, wed, thu, fri, sat, sun]);

        //
        // 2. Open the session (bootstraps the table on first use)
        //
        let store = RosterStore::new(&cfg.roster_file);
        let mut session = RosterSession::open(store)?;

        //
        // 3. Validate, persist, reload
        //
        let added = session.add(&draft)?;

        if let Err(e) = log::oplog(
            &cfg.log_file(),
            "add",
            added.id.as_str(),
            &format!("Added manager '{}'", added.name),
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }

        success(format!("Added manager '{}' (ID {}).", added.name, added.id));
    }

    Ok(())
}

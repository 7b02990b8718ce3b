use super::apply_day_specs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::RosterSession;
use crate::core::validate::ManagerDraft;
use crate::errors::{AppError, AppResult};
use crate::store::log;
use crate::store::roster::RosterStore;
use crate::ui::messages::success;

/// Update an existing manager. Only the fields given on the command line
/// change; the ID always stays what it was.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
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
        let store = RosterStore::new(&cfg.roster_file);
        let mut session = RosterSession::open(store)?;

        let index = session
            .select_by_id(id)
            .ok_or_else(|| AppError::NoSuchManager(id.clone()))?;
        let existing = session
            .get(index)
            .ok_or_else(|| AppError::NoSuchManager(id.clone()))?;

        //
        // Prefill from the current record, then apply the overrides
        //
        let mut draft = ManagerDraft::from_manager(existing);
        if let Some(n) = name {
            draft.name = n.clone();
        }
        if let Some(r) = role {
            draft.role = r.clone();
        }
        if let Some(g) = gender {
            draft.gender = g.clone();
        }
        apply_day_specs(&mut draft, [mon, tue, wed, thu, fri, sat, sun]);

        let updated = session.update(index, &draft)?;

        if let Err(e) = log::oplog(
            &cfg.log_file(),
            "update",
            updated.id.as_str(),
            &format!("Updated manager '{}'", updated.name),
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }

        success(format!(
            "Updated manager '{}' (ID {}).",
            updated.name, updated.id
        ));
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::RosterSession;
use crate::errors::{AppError, AppResult};
use crate::store::log;
use crate::store::roster::RosterStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = RosterStore::new(&cfg.roster_file);
        let mut session = RosterSession::open(store)?;

        let index = session
            .select_by_id(id)
            .ok_or_else(|| AppError::NoSuchManager(id.clone()))?;
        let target = session
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::NoSuchManager(id.clone()))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete '{}' (ID {})? This action is irreversible.",
            target.name, target.id
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = session.delete(index)?;

        if let Err(e) = log::oplog(
            &cfg.log_file(),
            "del",
            removed.id.as_str(),
            &format!("Deleted manager '{}'", removed.name),
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }

        success(format!(
            "Manager '{}' (ID {}) has been deleted.",
            removed.name, removed.id
        ));
    }

    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log;
use crate::store::roster::RosterStore;
use crate::store::shifts::ShiftStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the roster table
///  - the shift window table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.dir.as_deref(), cli.test)?;

    println!("⚙️  Initializing shiftroster…");
    if !cli.test {
        println!("📄 Config file  : {}", Config::config_file().display());
    }
    println!("🗂️  Roster table : {}", &cfg.roster_file);
    println!("🗂️  Shift table  : {}", &cfg.shifts_file);

    RosterStore::new(&cfg.roster_file).ensure_initialized()?;
    ShiftStore::new(&cfg.shifts_file).ensure_initialized()?;

    if let Err(e) = log::oplog(&cfg.log_file(), "init", "tables", "Tables initialized") {
        eprintln!("⚠️ Failed to write operations log: {}", e);
    }

    success("shiftroster initialization completed!");
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
            return Ok(());
        }

        if *print_config {
            let file = Config::config_file();
            if file.exists() {
                print!("{}", fs::read_to_string(&file)?);
            } else {
                warning("No configuration file found. Run 'shiftroster init' first.");
            }
            return Ok(());
        }

        // No flag: show the effective settings.
        println!("Roster table   : {}", cfg.roster_file);
        println!("Shift table    : {}", cfg.shifts_file);
        println!("Default role   : {}", cfg.default_role);
        println!("Default gender : {}", cfg.default_gender);
    }

    Ok(())
}

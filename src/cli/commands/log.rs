use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::read_log;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let lines = read_log(&cfg.log_file())?;

        if lines.is_empty() {
            info("The operations log is empty.");
        } else {
            for line in lines {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

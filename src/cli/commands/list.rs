use crate::cli::commands::{locate, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print every logged workout; markers too when a home location is configured.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let mut session = open_session(cfg, false)?;

        if session.store().is_empty() {
            info("No workouts logged yet.");
            return Ok(());
        }

        if cfg.home_location.is_some() {
            println!();
            locate(&mut session, cfg);
        }
    }
    Ok(())
}

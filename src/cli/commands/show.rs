use crate::cli::commands::{locate, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RenderedWorkout, Sidebar};
use crate::errors::AppResult;

/// Select a workout: print its entry and center the map on it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut session = open_session(cfg, true)?;
        let entry = RenderedWorkout::from_workout(session.store().find_by_id(id)?);

        locate(&mut session, cfg);
        session.view_mut().set_muted(false);
        session.view_mut().append_entry(&entry);
        session.select(id);
    }
    Ok(())
}

use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
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
    if let Commands::Reset { force } = cmd {
        let mut session = open_session(cfg, true)?;
        let count = session.store().len();

        if !*force
            && !ask_confirmation(&format!(
                "Delete ALL {count} logged workout(s)? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        session.reset()?;
        success(format!("{count} workout(s) deleted."));
    }
    Ok(())
}

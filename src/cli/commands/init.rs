use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::GeoPoint;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the storage directory
pub fn handle(cli: &Cli, cfg: &Config, path: &Path) -> AppResult<()> {
    let mut cfg = cfg.clone();

    if let Commands::Init {
        home_lat: Some(lat),
        home_lng: Some(lng),
    } = &cli.command
    {
        cfg.home_location = Some(GeoPoint::new(*lat, *lng)?);
    }

    println!("⚙️  Initializing rcardio…");
    cfg.init_all(path, cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", path.display());
    }
    println!("🗄️  Storage    : {}", cfg.storage_path().display());
    match cfg.home_location {
        Some(home) => println!("🏠 Home       : {home}"),
        None => println!("🏠 Home       : not set (map disabled)"),
    }

    success("rcardio initialization completed!");
    Ok(())
}

pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod reset;
pub mod show;

use crate::config::Config;
use crate::core::{ConfigGeolocator, PersistenceAdapter, SessionController};
use crate::errors::AppResult;
use crate::storage::FileStore;
use crate::ui::TerminalView;

pub type TerminalSession = SessionController<FileStore, TerminalView>;

/// Open the configured storage and run the session startup (load + render).
///
/// With `muted` the stored history is loaded without being printed.
pub fn open_session(cfg: &Config, muted: bool) -> AppResult<TerminalSession> {
    let store = FileStore::open(cfg.storage_path())?;
    let persistence = PersistenceAdapter::with_key(store, &cfg.storage_key)
        .label_date_format(&cfg.label_date_format);

    let mut view = TerminalView::new();
    view.set_muted(muted);

    let mut session = SessionController::new(persistence, view, cfg.session_settings());
    session.startup();
    Ok(session)
}

/// Run the one-shot geolocation request against the configured home location.
pub fn locate(session: &mut TerminalSession, cfg: &Config) {
    session.locate(&mut ConfigGeolocator::new(cfg.home_location));
}

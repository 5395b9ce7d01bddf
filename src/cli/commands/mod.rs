pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod now;
pub mod reset;
pub mod set;
pub mod show;
pub mod total;

use crate::config::Config;
use crate::core::session::{PAIRS_KEY, Session};
use crate::errors::AppResult;
use crate::models::TimePair;
use crate::storage::{JsonFileStore, KvStore};
use crate::ui::messages;
use crate::utils::clock::SystemClock;
use crate::utils::path::expand_tilde;

/// Open the persisted session configured for this invocation.
pub fn open_session(cfg: &Config) -> AppResult<Session<JsonFileStore, SystemClock>> {
    let path = expand_tilde(&cfg.store);
    let store = JsonFileStore::open(&path)?;

    // The session discards unreadable saved state on its own; the user
    // still deserves to hear that it happened.
    if let Some(raw) = store.get(PAIRS_KEY)
        && serde_json::from_str::<Vec<TimePair>>(&raw).is_err()
    {
        messages::warning("Saved pairs were unreadable and have been discarded");
    }

    Ok(Session::open_with_limit(store, SystemClock, cfg.history_limit))
}

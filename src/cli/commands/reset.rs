use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Clear all pairs and the last-recorded date.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = super::open_session(cfg)?;
    if session.reset_all()? {
        messages::success("Cleared all pairs");
    } else {
        messages::info("Already empty");
    }
    Ok(())
}

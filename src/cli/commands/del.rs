use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Delete a pair by number, or without one clear the latest entered time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index } = cmd {
        let mut session = super::open_session(cfg)?;

        match index {
            Some(index) => {
                let idx = index
                    .checked_sub(1)
                    .ok_or(AppError::InvalidPair(*index))?;
                session.delete_pair(idx)?;
                messages::success(format!("Deleted pair {}", index));
            }
            None => {
                if session.delete_latest()? {
                    messages::success("Deleted the latest entered time");
                } else {
                    messages::info("Nothing to delete");
                }
            }
        }
    }
    Ok(())
}

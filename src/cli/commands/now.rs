use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Field;
use crate::ui::messages;

/// Record the current time into a field. With an explicit index the field
/// selector is required; without one the first empty field is filled (a new
/// pair is appended when everything is full).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Now { index, field } = cmd {
        let mut session = super::open_session(cfg)?;

        match index {
            Some(index) => {
                let idx = index
                    .checked_sub(1)
                    .ok_or(AppError::InvalidPair(*index))?;
                let field = match field {
                    Some(code) => Field::from_code(code)?,
                    None => {
                        return Err(AppError::Other(
                            "a field (start or end) is required with an index".to_string(),
                        ));
                    }
                };
                let time = session.set_now(idx, field)?;
                messages::success(format!("Set {} of pair {} to {}", field, index, time));
            }
            None => {
                let (idx, field, time) = session.set_now_first_empty()?;
                messages::success(format!("Set {} of pair {} to {}", field, idx + 1, time));
            }
        }
    }
    Ok(())
}

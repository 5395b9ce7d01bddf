use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Field;
use crate::ui::messages;
use crate::utils::time::validate_field_value;

/// Set one field of a pair to a literal value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        index,
        field,
        value,
    } = cmd
    {
        let idx = index
            .checked_sub(1)
            .ok_or(AppError::InvalidPair(*index))?;
        let field = Field::from_code(field)?;
        validate_field_value(value)?;

        let mut session = super::open_session(cfg)?;
        session.set_field(idx, field, value)?;

        if value.is_empty() {
            messages::success(format!("Cleared {} of pair {}", field, index));
        } else {
            messages::success(format!("Set {} of pair {} to {}", field, index, value));
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::validate_field_value;

/// Append a time pair; start/end are optional and validated when present.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { start, end } = cmd {
        let start = start.as_deref().unwrap_or("");
        let end = end.as_deref().unwrap_or("");
        validate_field_value(start)?;
        validate_field_value(end)?;

        let mut session = super::open_session(cfg)?;
        session.add_filled_pair(start, end)?;
        messages::success(format!("Added pair {}", session.pairs().len()));
    }
    Ok(())
}

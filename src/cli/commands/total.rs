use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time::{format_total, format_total_short};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Total { raw } = cmd {
        let session = super::open_session(cfg)?;
        let total = session.total_hours();

        if *raw {
            // 3 decimals, suitable for piping into other tools
            println!("{}", format_total(total));
        } else {
            println!("{} h", format_total_short(total));
        }
    }
    Ok(())
}

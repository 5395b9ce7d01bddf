use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Create the config directory, config file, and an empty state store.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;
    messages::success(format!(
        "Initialized configuration in {}",
        Config::config_dir().display()
    ));
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
            return Ok(());
        }

        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{}", yaml);
            return Ok(());
        }

        // No flag: show where things live
        println!("config: {}", Config::config_file().display());
        println!("store:  {}", cfg.store);
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}

fn default_history_limit() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            history_limit: default_history_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timepairs")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timepairs")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timepairs.conf")
    }

    /// Return the full path of the persisted-state store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("timepairs.json")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and an empty state store.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store name: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            history_limit: default_history_limit(),
        };

        // Write config file (skipped in test mode so tests never touch the
        // user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        // Seed an empty store file if none exists yet
        if !store_path.exists() {
            fs::write(&store_path, "{}")?;
        }

        Ok(())
    }
}

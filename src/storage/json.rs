//! File-backed key-value store.
//!
//! The whole store is one JSON object on disk ({"key": "value", ...}),
//! rewritten after every mutation. Saving is best-effort: a failed write is
//! reported to the caller but the in-memory state stays consistent, so the
//! worst case is losing the latest change when the process dies.

use crate::errors::{AppError, AppResult};
use crate::storage::KvStore;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create) a store at `path`. A missing file starts empty; an
    /// unreadable or malformed file is treated as empty rather than fatal,
    /// matching the recovery policy for corrupt persisted state.
    pub fn open(path: &Path) -> AppResult<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

//! Settings collection
//!
//! Unlike record collections, settings are addressed by a fixed string key
//! rather than a record id. On disk they are a single JSON object.

use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::{Map, Value};

use crate::error::BudgetError;

use super::file_io::{read_json, write_json_atomic};

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<Map<String, Value>>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Map::new()),
        }
    }

    pub fn load(&self) -> Result<(), BudgetError> {
        let stored: Map<String, Value> = read_json("settings", &self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = stored;

        Ok(())
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Result<Option<Value>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    /// Store `value` under `key`, writing through to disk
    pub fn put(&self, value: Value, key: &str) -> Result<(), BudgetError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let previous = data.insert(key.to_string(), value);
        if let Err(e) = write_json_atomic("settings", &self.path, &*data) {
            match previous {
                Some(old) => data.insert(key.to_string(), old),
                None => data.remove(key),
            };
            return Err(e);
        }

        tracing::debug!(key, "stored setting");
        Ok(())
    }

    /// Snapshot of every stored setting
    pub fn get_all(&self) -> Result<Map<String, Value>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }
}

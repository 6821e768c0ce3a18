//! Snapshot persistence: a process-wide JSON key-value file.
//!
//! The store holds the last count that survived a full debounce window
//! under the `"count"` key. It is write-only from the widget's point of
//! view: nothing is read back on startup, the file is audit state.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

const COUNT_KEY: &str = "count";

/// Errors from snapshot file access.
///
/// The save reaction itself swallows these (the simulated save has no
/// failure path); they surface only in logs and in direct store use.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read snapshot file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write snapshot file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<data_dir>/tally/snapshot.json`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("tally").join("snapshot.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a saved count under the `"count"` key.
    pub fn write_count(&self, value: i64) -> Result<(), StoreError> {
        let mut map = self.load_map()?;
        map.insert(COUNT_KEY.to_string(), Value::from(value));
        self.store_map(&map)
    }

    /// Remove the `"count"` key entirely, keeping the file in place.
    ///
    /// Removing from a store that was never written is a no-op.
    pub fn remove_count(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut map = self.load_map()?;
        map.remove(COUNT_KEY);
        self.store_map(&map)
    }

    /// Current saved count, if the key is present.
    pub fn read_count(&self) -> Result<Option<i64>, StoreError> {
        let map = self.load_map()?;
        Ok(map.get(COUNT_KEY).and_then(Value::as_i64))
    }

    fn load_map(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn store_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content = serde_json::to_string_pretty(map).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, content).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

//! Keyed JSON storage, on disk or in memory.

use crate::error::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the raw value stored under `key`, `None` if nothing was stored yet.
    pub async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No stored value at {:?}", path);
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path).await?))
    }

    /// Write the raw value for `key`.
    pub async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;

        // Write atomically using temp file + rename
        let path = self.path_for(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).await?;
        fs::rename(&temp_path, &path).await?;

        debug!("Saved {} ({} bytes) to {:?}", key, value.len(), path);
        Ok(())
    }
}

/// Process-local storage, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    pub async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backend for persisted client state.
#[derive(Debug, Clone)]
pub enum Storage {
    /// JSON files in a data directory
    File(FileStorage),
    /// In-memory only (no persistence)
    Memory(MemoryStorage),
}

impl Storage {
    /// File-backed storage rooted at `dir`.
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        let storage = FileStorage::new(dir);
        info!("Using file storage in {:?}", storage.dir());
        Storage::File(storage)
    }

    /// Force memory storage.
    pub fn memory() -> Self {
        Storage::Memory(MemoryStorage::default())
    }

    /// Read the raw string stored under `key`.
    pub async fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Storage::File(s) => s.read(key).await,
            Storage::Memory(s) => s.read(key).await,
        }
    }

    /// Overwrite the raw string stored under `key`.
    pub async fn write_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Storage::File(s) => s.write(key, value).await,
            Storage::Memory(s) => s.write(key, value).await,
        }
    }

    /// Load and deserialize the value under `key`.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.read_raw(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and save `value` under `key`.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.write_raw(key, &raw).await
    }
}

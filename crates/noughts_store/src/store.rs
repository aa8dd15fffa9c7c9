//! Key/value store collaborator and backends.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::StoreError;

/// A durable key/value collaborator addressed by string keys.
///
/// Entries are opaque strings; callers own the serialization format.
pub trait KeyValueStore {
    /// Reads the entry at `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the entry at `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store backend.
///
/// Nothing survives the process; useful for tests and throwaway sessions,
/// much like an in-memory database path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store holding all entries in one JSON object.
///
/// The file is read once at open. Every mutation rewrites it before
/// returning, so a completed call means the entry is on disk.
#[derive(Debug, Clone, Getters)]
pub struct JsonFileStore {
    /// Location of the backing file.
    path: PathBuf,
    /// In-memory mirror of the file contents.
    #[getter(skip)]
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, starting empty if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or is
    /// not a JSON object of string entries.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries: BTreeMap<String, String> = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            debug!("store file absent, starting empty");
            BTreeMap::new()
        };
        info!(entries = entries.len(), "store opened");
        Ok(Self { path, entries })
    }

    /// Rewrites the backing file from the in-memory mirror.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("noughts_store_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        assert!(store.is_empty());
        // Removing again is fine.
        store.remove("a").unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = scratch_path("reopen");
        let _ = std::fs::remove_file(&path);

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("name", "\"Ada\"").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("name").unwrap(), Some("\"Ada\"".to_string()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_absent_file_starts_empty() {
        let path = scratch_path("absent");
        let _ = std::fs::remove_file(&path);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        // Opening alone must not create the file.
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_rejects_malformed_file() {
        let path = scratch_path("malformed");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(JsonFileStore::open(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }
}

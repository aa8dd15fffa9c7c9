//! The persisted keyed state cell.

use derive_getters::Getters;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{KeyValueStore, StoreError};

/// Initial value for a cell when the store holds nothing usable at its key.
///
/// Either a ready value or a zero-argument producer, resolved lazily and
/// at most once.
pub enum Seed<T> {
    /// A literal starting value.
    Value(T),
    /// A producer run only when the stored entry is absent or unreadable.
    Producer(Box<dyn FnOnce() -> T>),
}

impl<T> Seed<T> {
    /// Seed from a literal value.
    pub fn value(value: T) -> Self {
        Seed::Value(value)
    }

    /// Seed from a zero-argument producer.
    pub fn producer(produce: impl FnOnce() -> T + 'static) -> Self {
        Seed::Producer(Box::new(produce))
    }

    fn resolve(self) -> T {
        match self {
            Seed::Value(value) => value,
            Seed::Producer(produce) => produce(),
        }
    }
}

impl<T> From<T> for Seed<T> {
    fn from(value: T) -> Self {
        Seed::Value(value)
    }
}

impl<T> std::fmt::Debug for Seed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seed::Value(_) => f.write_str("Seed::Value"),
            Seed::Producer(_) => f.write_str("Seed::Producer"),
        }
    }
}

/// A keyed state cell mirrored to a [`KeyValueStore`].
///
/// The live value stays in memory; every accepted change is serialized to
/// JSON and written back under the cell's key before the call returns.
/// Renaming the key evicts the entry under the old key first, so the
/// store never accumulates orphans.
#[derive(Debug, Getters)]
pub struct PersistedCell<T> {
    /// Key the cell is stored under.
    key: String,
    /// Key the last synchronization wrote to.
    prev_key: String,
    /// The live value.
    value: T,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the cell from `store`, seeding it when nothing usable is
    /// stored under `key`.
    ///
    /// Performs exactly one store read and no writes. A stored entry that
    /// fails to deserialize is treated as absent and the seed applies
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store read itself fails.
    #[instrument(skip_all)]
    pub fn load<S: KeyValueStore>(
        store: &S,
        key: impl Into<String>,
        seed: Seed<T>,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let value = match store.get(&key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    debug!(key = %key, "loaded stored value");
                    value
                }
                Err(err) => {
                    warn!(key = %key, error = %err, "stored entry unreadable, falling back to seed");
                    seed.resolve()
                }
            },
            None => {
                debug!(key = %key, "no stored entry, seeding");
                seed.resolve()
            }
        };
        Ok(Self {
            prev_key: key.clone(),
            key,
            value,
        })
    }

    /// Replaces the value and synchronizes the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the store write fails.
    #[instrument(skip_all, fields(key = %self.key))]
    pub fn set<S: KeyValueStore>(&mut self, store: &mut S, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.sync(store)
    }

    /// Mutates the value in place, then synchronizes the store once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the store write fails.
    #[instrument(skip_all, fields(key = %self.key))]
    pub fn modify<S: KeyValueStore>(
        &mut self,
        store: &mut S,
        apply: impl FnOnce(&mut T),
    ) -> Result<(), StoreError> {
        apply(&mut self.value);
        self.sync(store)
    }

    /// Moves the cell to a new key, evicting the entry under the old one.
    ///
    /// Renaming to the current key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the eviction or the store write fails.
    #[instrument(skip_all, fields(from = %self.key))]
    pub fn rename<S: KeyValueStore>(
        &mut self,
        store: &mut S,
        key: impl Into<String>,
    ) -> Result<(), StoreError> {
        let key = key.into();
        if key == self.key {
            return Ok(());
        }
        self.key = key;
        self.sync(store)
    }

    /// Mirrors the value to the store: evict the previously synchronized
    /// key if it changed, remember the current key, then write the
    /// serialized value under it.
    fn sync<S: KeyValueStore>(&mut self, store: &mut S) -> Result<(), StoreError> {
        if self.prev_key != self.key {
            store.remove(&self.prev_key)?;
            debug!(prev_key = %self.prev_key, "evicted previous key");
        }
        self.prev_key = self.key.clone();

        let raw = serde_json::to_string(&self.value)?;
        store.set(&self.key, &raw)?;
        debug!(key = %self.key, "value synchronized");
        Ok(())
    }
}

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// JSON helper that surfaces every store/retrieve/remove failure to the caller.
#[derive(Debug, Clone)]
pub struct StrictStorage<S> {
    store: S,
}

impl<S: KeyValueStore> StrictStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decoded value under `key`, or `None` when nothing (or an empty string) is stored.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get_item(key)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Deserialize {
                    key: key.to_string(),
                    source,
                }),
            _ => Ok(None),
        }
    }

    /// Decoded value under `key`, or `fallback` when nothing is stored.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<T, StorageError> {
        Ok(self.load(key)?.unwrap_or(fallback))
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set_item(key, &raw)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove_item(key)
    }
}

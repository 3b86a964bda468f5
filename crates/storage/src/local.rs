use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::KeyValueStore;
use crate::strict::StrictStorage;

/// JSON helper that never fails.
///
/// Read failures (absent key, undecodable value, unavailable store) yield the fallback;
/// write and remove failures are logged and swallowed.
#[derive(Debug, Clone)]
pub struct LocalStorage<S> {
    inner: StrictStorage<S>,
}

impl<S: KeyValueStore> LocalStorage<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: StrictStorage::new(store),
        }
    }

    pub fn store(&self) -> &S {
        self.inner.store()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.inner.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(key, error = %err, "storage read failed; using fallback");
                fallback
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match self.inner.set(key, value) {
            Ok(()) => tracing::debug!(key, "value persisted"),
            Err(err) => tracing::warn!(key, error = %err, "failed to persist value"),
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.inner.remove(key) {
            tracing::warn!(key, error = %err, "failed to remove stored value");
        }
    }
}

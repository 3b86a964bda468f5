//! Storage configuration from environment variables.
//!
//! - `SHOPCART_STORAGE_DIR`: use a [`FileStore`] rooted at this directory.
//! - `SHOPCART_STORAGE_QUOTA_BYTES`: byte quota for the in-memory store.
//!
//! With neither set, storage is in-memory and unbounded.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::StorageError;
use crate::file::FileStore;
use crate::memory::InMemoryStore;
use crate::store::KeyValueStore;

pub const STORAGE_DIR_VAR: &str = "SHOPCART_STORAGE_DIR";
pub const STORAGE_QUOTA_VAR: &str = "SHOPCART_STORAGE_QUOTA_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory { quota_bytes: Option<usize> },
    File { root: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory { quota_bytes: None },
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StorageError> {
        if let Some(dir) = lookup(STORAGE_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            return Ok(Self {
                backend: StorageBackend::File {
                    root: PathBuf::from(dir),
                },
            });
        }

        let quota_bytes = match lookup(STORAGE_QUOTA_VAR) {
            Some(raw) => Some(raw.trim().parse::<usize>().map_err(|e| {
                StorageError::Config(format!("{STORAGE_QUOTA_VAR}={raw:?}: {e}"))
            })?),
            None => None,
        };

        Ok(Self {
            backend: StorageBackend::Memory { quota_bytes },
        })
    }

    /// Construct the configured store.
    pub fn open(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        let store: Arc<dyn KeyValueStore> = match &self.backend {
            StorageBackend::Memory { quota_bytes: None } => Arc::new(InMemoryStore::new()),
            StorageBackend::Memory {
                quota_bytes: Some(quota),
            } => Arc::new(InMemoryStore::with_quota(*quota)),
            StorageBackend::File { root } => Arc::new(FileStore::open(root.clone())?),
        };
        tracing::info!(backend = ?self.backend, "storage opened");
        Ok(store)
    }
}

//! Client-local key/value persistence for JSON-serializable values.
//!
//! A [`KeyValueStore`] holds raw strings under string keys. On top of it:
//! - [`StrictStorage`] surfaces every failure as a [`StorageError`];
//! - [`LocalStorage`] never fails: errors are logged and reads fall back to a default;
//! - [`PersistedState`] keeps an in-memory value bound to a key and writes it through.
//!
//! Stores are constructed once per session and injected; there is no global handle.

pub mod config;
pub mod error;
pub mod file;
pub mod local;
pub mod memory;
pub mod state;
pub mod store;
pub mod strict;

pub use config::{StorageBackend, StorageConfig};
pub use error::StorageError;
pub use file::FileStore;
pub use local::LocalStorage;
pub use memory::InMemoryStore;
pub use state::PersistedState;
pub use store::KeyValueStore;
pub use strict::StrictStorage;

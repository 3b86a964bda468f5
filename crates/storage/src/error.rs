use thiserror::Error;

/// Persistence failure.
///
/// These are infrastructure errors; the lenient helpers downgrade them to log lines.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize value for key {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to deserialize value stored under key {key:?}: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage io failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage quota exceeded writing key {key:?}: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid storage configuration: {0}")]
    Config(String),
}

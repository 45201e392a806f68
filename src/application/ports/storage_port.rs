//! KeyValueStore - interface for the durable string-keyed store
//!
//! Values are JSON documents. The store knows nothing about their shape.

use thiserror::Error;

/// Key holding the history log
pub const HISTORY_KEY: &str = "history";
/// Key holding the favorites set
pub const FAVORITES_KEY: &str = "favorites";

/// Storage operation error
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key is not usable as a storage name
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Underlying IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StorageError> for crate::domain::DomainError {
    fn from(err: StorageError) -> Self {
        crate::domain::DomainError::StorageError(err.to_string())
    }
}

/// Port interface for persistent key/value storage.
///
/// Implementations use interior mutability so one store can back several
/// collections at once.
pub trait KeyValueStore: Send + Sync {
    /// Raw value for `key`, `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Forget `key`; missing keys are not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

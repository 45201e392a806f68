//! MemoryStoreGateway - in-process key/value store
//!
//! Nothing outlives the process. Used for `--ephemeral` runs and tests.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::application::ports::{KeyValueStore, StorageError};

/// In-memory key/value store
#[derive(Debug, Default)]
pub struct MemoryStoreGateway {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStoreGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStoreGateway {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

//! JSON array collections on top of a KeyValueStore

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::ports::{KeyValueStore, StorageError};

/// Read a JSON array stored under `key`.
///
/// Missing keys, read failures and corrupt JSON all yield an empty
/// collection; the user never sees these.
pub(crate) fn load_array<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored collection");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored collection, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "stored collection is not valid JSON, treating as empty");
            Vec::new()
        }
    }
}

/// Write a collection as a JSON array under `key`
pub(crate) fn save_array<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(items)?;
    store.set(key, &json)
}

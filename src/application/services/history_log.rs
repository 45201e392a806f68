//! HistoryLog - viewing history persisted under the "history" key
//!
//! Every mutation re-reads storage, applies the change and writes the whole
//! array back before updating the in-memory copy.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::collection::{load_array, save_array};
use crate::application::ports::{KeyValueStore, HISTORY_KEY};
use crate::domain::entities::{HistoryEntry, ImageRecord};
use crate::domain::errors::DomainError;
use crate::domain::repositories::{HistoryRepository, MAX_HISTORY_ENTRIES};

/// Store-backed history log
pub struct HistoryLog<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore + ?Sized> HistoryLog<S> {
    /// Create a log and read the current entries through
    pub fn new(store: Arc<S>) -> Self {
        let mut log = Self {
            store,
            entries: Vec::new(),
        };
        log.init();
        log
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: KeyValueStore + ?Sized> HistoryRepository for HistoryLog<S> {
    fn record(&mut self, record: &ImageRecord, viewed_at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut entries = self.load();

        if entries.iter().any(|e| e.record.date == record.date) {
            debug!(date = %record.date, "already in history");
            self.entries = entries;
            return Ok(false);
        }

        entries.insert(0, HistoryEntry::new(record.clone(), viewed_at));
        entries.truncate(MAX_HISTORY_ENTRIES);

        save_array(self.store.as_ref(), HISTORY_KEY, &entries)?;
        debug!(date = %record.date, len = entries.len(), "recorded in history");
        self.entries = entries;

        Ok(true)
    }

    fn load(&self) -> Vec<HistoryEntry> {
        load_array(self.store.as_ref(), HISTORY_KEY)
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn init(&mut self) {
        self.entries = self.load();
    }
}

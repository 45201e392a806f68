//! HistoryRepository - interface for the viewing history log
//!
//! Bounded, de-duplicated by date, most recent first.

use chrono::{DateTime, Utc};

use crate::domain::entities::{HistoryEntry, ImageRecord};
use crate::domain::errors::DomainError;

/// Maximum number of entries the log keeps
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Repository interface for viewing history
pub trait HistoryRepository: Send {
    /// Record a viewed entry. Returns false if the date was already logged.
    fn record(&mut self, record: &ImageRecord, viewed_at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Read the log from persistent storage (empty if missing or unreadable)
    fn load(&self) -> Vec<HistoryEntry>;

    /// Cached entries, most recent first
    fn entries(&self) -> &[HistoryEntry];

    /// Refresh the cache from persistent storage
    fn init(&mut self);

    /// Up to `limit` cached entries, most recent first
    fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let entries = self.entries();
        &entries[..limit.min(entries.len())]
    }
}

/// A null implementation for testing
pub struct NullHistoryRepository;

impl HistoryRepository for NullHistoryRepository {
    fn record(&mut self, _record: &ImageRecord, _viewed_at: DateTime<Utc>) -> Result<bool, DomainError> {
        Ok(false)
    }

    fn load(&self) -> Vec<HistoryEntry> {
        Vec::new()
    }

    fn entries(&self) -> &[HistoryEntry] {
        &[]
    }

    fn init(&mut self) {}
}

//! FavoritesSet - saved records persisted under the "favorites" key
//!
//! Keyed by feed date. Writes go through to the store before the
//! in-memory copy changes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::collection::{load_array, save_array};
use crate::application::ports::{KeyValueStore, FAVORITES_KEY};
use crate::domain::entities::{FavoriteEntry, ImageRecord};
use crate::domain::errors::DomainError;
use crate::domain::repositories::FavoritesRepository;
use crate::domain::value_objects::ApodDate;

/// Store-backed favorites set
pub struct FavoritesSet<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    entries: Vec<FavoriteEntry>,
}

impl<S: KeyValueStore + ?Sized> FavoritesSet<S> {
    /// Create a set and read the current entries through
    pub fn new(store: Arc<S>) -> Self {
        let mut set = Self {
            store,
            entries: Vec::new(),
        };
        set.init();
        set
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn write(&mut self, entries: Vec<FavoriteEntry>) -> Result<(), DomainError> {
        save_array(self.store.as_ref(), FAVORITES_KEY, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> FavoritesRepository for FavoritesSet<S> {
    fn add(&mut self, record: &ImageRecord, saved_at: DateTime<Utc>) -> Result<(), DomainError> {
        let mut entries = self.load();
        if entries.iter().any(|e| e.record.date == record.date) {
            self.entries = entries;
            return Ok(());
        }

        entries.push(FavoriteEntry::new(record.clone(), saved_at));
        self.write(entries)?;
        debug!(date = %record.date, "added favorite");
        Ok(())
    }

    fn remove(&mut self, date: &ApodDate) -> Result<(), DomainError> {
        let mut entries = self.load();
        entries.retain(|e| e.key() != date);
        self.write(entries)?;
        debug!(%date, "removed favorite");
        Ok(())
    }

    fn is_favorite(&self, date: &ApodDate) -> bool {
        self.entries.iter().any(|e| e.key() == date)
    }

    fn load(&self) -> Vec<FavoriteEntry> {
        load_array(self.store.as_ref(), FAVORITES_KEY)
    }

    fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    fn init(&mut self) {
        self.entries = self.load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::MemoryStoreGateway;
    use crate::domain::entities::MediaType;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn record(date: &str) -> ImageRecord {
        ImageRecord {
            date: date.parse().unwrap(),
            title: "T".to_string(),
            explanation: String::new(),
            url: format!("http://x/{}.jpg", date),
            hdurl: None,
            media_type: MediaType::Image,
            copyright: None,
        }
    }

    #[test]
    fn test_add_and_query() {
        let mut set = FavoritesSet::new(Arc::new(MemoryStoreGateway::new()));
        let r = record("2020-01-01");

        assert!(!set.is_favorite(&r.date));
        set.add(&r, at()).unwrap();
        assert!(set.is_favorite(&r.date));

        // Adding twice keeps the key unique
        set.add(&r, at()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = FavoritesSet::new(Arc::new(MemoryStoreGateway::new()));
        let a = record("2020-01-01");
        let b = record("2020-01-02");
        set.add(&a, at()).unwrap();
        set.add(&b, at()).unwrap();

        set.remove(&a.date).unwrap();

        assert!(!set.is_favorite(&a.date));
        assert!(set.is_favorite(&b.date));
        assert_eq!(set.load().len(), 1);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let store = Arc::new(MemoryStoreGateway::new());
        let mut set = FavoritesSet::new(store);
        set.add(&record("2019-07-04"), at()).unwrap();

        let before: Vec<ApodDate> = set.entries().iter().map(|e| *e.key()).collect();
        let r = record("2020-01-01");

        assert!(set.toggle(&r, at()).unwrap());
        assert!(!set.toggle(&r, at()).unwrap());

        let after: Vec<ApodDate> = set.entries().iter().map(|e| *e.key()).collect();
        assert_eq!(before, after);
        assert_eq!(set.load().len(), 1);

        // And from the other side: removing then re-adding an existing favorite
        let existing = record("2019-07-04");
        assert!(!set.toggle(&existing, at()).unwrap());
        assert!(set.toggle(&existing, at()).unwrap());
        assert!(set.is_favorite(&existing.date));
    }

    #[test]
    fn test_persists_across_instances() {
        let store = Arc::new(MemoryStoreGateway::new());
        {
            let mut set = FavoritesSet::new(store.clone());
            set.add(&record("2021-03-03"), at()).unwrap();
        }

        let set = FavoritesSet::new(store);
        assert!(set.is_favorite(&"2021-03-03".parse().unwrap()));
    }

    #[test]
    fn test_invalid_json_loads_empty() {
        let store = Arc::new(MemoryStoreGateway::new());
        store.set(FAVORITES_KEY, "nope").unwrap();

        let set = FavoritesSet::new(store);
        assert!(set.is_empty());
    }

    #[test]
    fn test_saved_at_is_written() {
        let store = Arc::new(MemoryStoreGateway::new());
        let mut set = FavoritesSet::new(store.clone());
        set.add(&record("2020-01-01"), at()).unwrap();

        assert_eq!(set.entries()[0].saved_at, at());
        let raw = store.get(FAVORITES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"savedAt\":\"2024-06-01T12:00:00Z\""));
    }
}

//! FavoritesRepository - interface for the user's saved records
//!
//! Unbounded and unique by date.

use chrono::{DateTime, Utc};

use crate::domain::entities::{FavoriteEntry, ImageRecord};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ApodDate;

/// Repository interface for favorites
pub trait FavoritesRepository: Send {
    /// Save a record. Adding an already saved date is a no-op.
    fn add(&mut self, record: &ImageRecord, saved_at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Drop every entry saved under `date`
    fn remove(&mut self, date: &ApodDate) -> Result<(), DomainError>;

    /// Membership test
    fn is_favorite(&self, date: &ApodDate) -> bool;

    /// Read favorites from persistent storage (empty if missing or unreadable)
    fn load(&self) -> Vec<FavoriteEntry>;

    /// Cached entries in the order they were saved
    fn entries(&self) -> &[FavoriteEntry];

    /// Refresh the cache from persistent storage
    fn init(&mut self);

    /// Remove if present, add otherwise (stamped `at`). Returns the new membership.
    fn toggle(&mut self, record: &ImageRecord, at: DateTime<Utc>) -> Result<bool, DomainError> {
        if self.is_favorite(&record.date) {
            self.remove(&record.date)?;
            Ok(false)
        } else {
            self.add(record, at)?;
            Ok(true)
        }
    }
}

/// A null implementation for testing
pub struct NullFavoritesRepository;

impl FavoritesRepository for NullFavoritesRepository {
    fn add(&mut self, _record: &ImageRecord, _saved_at: DateTime<Utc>) -> Result<(), DomainError> {
        Ok(())
    }

    fn remove(&mut self, _date: &ApodDate) -> Result<(), DomainError> {
        Ok(())
    }

    fn is_favorite(&self, _date: &ApodDate) -> bool {
        false
    }

    fn load(&self) -> Vec<FavoriteEntry> {
        Vec::new()
    }

    fn entries(&self) -> &[FavoriteEntry] {
        &[]
    }

    fn init(&mut self) {}
}

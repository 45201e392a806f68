//! FavoriteEntry entity - a record the user chose to keep

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ImageRecord;
use crate::domain::value_objects::ApodDate;

/// Saved record, unique by date
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub record: ImageRecord,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(record: ImageRecord, saved_at: DateTime<Utc>) -> Self {
        Self { record, saved_at }
    }

    /// Canonical favorites key
    pub fn key(&self) -> &ApodDate {
        &self.record.date
    }
}

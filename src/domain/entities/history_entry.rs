//! HistoryEntry entity - a record the user has viewed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ImageRecord;

/// Viewed record; the log keeps these most-recent-first
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: ImageRecord,
    /// Absent in logs written before view times were tracked
    #[serde(rename = "viewedAt", default, skip_serializing_if = "Option::is_none")]
    pub viewed_at: Option<DateTime<Utc>>,
}

impl HistoryEntry {
    pub fn new(record: ImageRecord, viewed_at: DateTime<Utc>) -> Self {
        Self {
            record,
            viewed_at: Some(viewed_at),
        }
    }
}

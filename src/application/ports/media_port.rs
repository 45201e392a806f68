//! MediaPort - saving a record's media on the local machine

use std::path::{Path, PathBuf};

use super::feed_port::FetchError;
use crate::domain::entities::ImageRecord;

/// What a download did with a record's media
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Image written to this file
    Saved(PathBuf),
    /// Not a still image; hand this URL to the platform instead
    External(String),
}

/// Port interface for saving media
pub trait MediaPort: Send + Sync {
    fn download(&self, record: &ImageRecord, dir: &Path) -> Result<DownloadOutcome, FetchError>;
}

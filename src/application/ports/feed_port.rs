//! FeedPort - interface to the remote daily image feed

use thiserror::Error;

use crate::domain::entities::ImageRecord;
use crate::domain::value_objects::ApodDate;

/// Message shown to the user for any fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// Failure to obtain a record from the feed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Feed answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not a valid record
    #[error("Decode error: {0}")]
    Decode(String),

    /// Requested date is outside the feed's range
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Feed base URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Saving fetched media failed
    #[error("IO error: {0}")]
    Io(String),
}

impl FetchError {
    /// Generic retry-later text; details stay in the logs
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

/// Port interface for the feed.
///
/// One call is one request: no retry, no caching.
pub trait FeedPort: Send + Sync {
    fn fetch(&self, date: ApodDate) -> Result<ImageRecord, FetchError>;
}

//! FetchImageUseCase - get one feed record, for a given or random date
//!
//! Range checks happen here so the feed is never asked for a date it
//! cannot have.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, warn};

use crate::application::ports::{FeedPort, FetchError};
use crate::domain::entities::ImageRecord;
use crate::domain::value_objects::ApodDate;

/// Use case for fetching feed records
pub struct FetchImageUseCase<F: FeedPort> {
    feed: Arc<F>,
}

impl<F: FeedPort> Clone for FetchImageUseCase<F> {
    fn clone(&self) -> Self {
        Self {
            feed: Arc::clone(&self.feed),
        }
    }
}

impl<F: FeedPort> FetchImageUseCase<F> {
    pub fn new(feed: Arc<F>) -> Self {
        Self { feed }
    }

    pub fn feed(&self) -> &Arc<F> {
        &self.feed
    }

    /// The date a request will actually use: the given one, or a uniformly
    /// random date in the feed range when none was given
    pub fn resolve_date<R: Rng + ?Sized>(
        requested: Option<ApodDate>,
        today: NaiveDate,
        rng: &mut R,
    ) -> ApodDate {
        match requested {
            Some(date) => date,
            None => {
                let date = ApodDate::random(rng, today);
                debug!(%date, "picked random date");
                date
            }
        }
    }

    /// Fetch the record for `date`
    pub fn execute(&self, date: ApodDate, today: NaiveDate) -> Result<ImageRecord, FetchError> {
        if !date.is_in_range(today) {
            warn!(%date, "refusing out-of-range date");
            return Err(FetchError::InvalidDate(date.to_string()));
        }

        self.feed.fetch(date)
    }
}

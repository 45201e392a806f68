//! ApodDate value object - a calendar date the feed has an entry for
//!
//! The feed starts on 1995-06-16 and ends today. Every `ApodDate` that
//! leaves a checked constructor lies inside that range.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::errors::DomainError;

/// Wire format used by the feed and by persisted entries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// First day the feed published an entry
pub fn first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN)
}

/// A feed date in `YYYY-MM-DD` form
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApodDate(NaiveDate);

impl ApodDate {
    /// Wrap a date without range checking.
    ///
    /// Used for dates that come back from the feed or from storage, which
    /// were validated when they were first requested.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a date, rejecting anything outside [first_date, today]
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, DomainError> {
        let first = first_date();
        if date < first {
            return Err(DomainError::ValidationError(format!(
                "{} is before the first feed entry ({})",
                date.format(DATE_FORMAT),
                first.format(DATE_FORMAT)
            )));
        }
        if date > today {
            return Err(DomainError::ValidationError(format!(
                "{} is in the future (today is {})",
                date.format(DATE_FORMAT),
                today.format(DATE_FORMAT)
            )));
        }
        Ok(Self(date))
    }

    /// Parse `YYYY-MM-DD` and check the range in one go
    pub fn parse_in_range(s: &str, today: NaiveDate) -> Result<Self, DomainError> {
        let date: ApodDate = s.parse()?;
        Self::new(date.0, today)
    }

    /// Today's entry; clamps to the first feed date if the clock is wrong
    pub fn today(today: NaiveDate) -> Self {
        Self(today.max(first_date()))
    }

    /// Pick a date uniformly at random in [first_date, today], inclusive
    pub fn random<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        let first = first_date();
        let span = (today - first).num_days();
        if span <= 0 {
            return Self(first);
        }
        let offset = rng.gen_range(0..=span);
        Self(first + Duration::days(offset))
    }

    /// Whether the date is inside the feed range as of `today`
    pub fn is_in_range(&self, today: NaiveDate) -> bool {
        self.0 >= first_date() && self.0 <= today
    }

    /// The underlying calendar date
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ApodDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ApodDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::ParseError(format!("invalid date '{}': {}", s, e)))
    }
}

impl Serialize for ApodDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApodDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

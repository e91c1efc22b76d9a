//! Time source abstraction
//!
//! Vehicle validation and pricing both depend on "the current year". Rather
//! than reading the system time from deep inside the domain, callers inject a
//! [`Clock`], which makes every age-dependent rule deterministic under test.

use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid calendar year: {0}")]
    InvalidYear(i32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// A source of the current calendar date
pub trait Clock: fmt::Debug + Send + Sync {
    /// Returns today's date
    fn today(&self) -> NaiveDate;

    /// Returns the current calendar year
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Clock backed by the system time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock frozen on a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports the given date
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Creates a clock frozen on January 1st of the given year
    pub fn at_year(year: i32) -> Result<Self, TemporalError> {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .map(Self::new)
            .ok_or(TemporalError::InvalidYear(year))
    }

    /// Creates a clock from an ISO-8601 date string (`YYYY-MM-DD`)
    pub fn parse(date: &str) -> Result<Self, TemporalError> {
        date.parse::<NaiveDate>()
            .map(Self::new)
            .map_err(|_| TemporalError::InvalidDate(date.to_string()))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

//! Source of "today" for date-of-birth checks

use chrono::{Local, NaiveDate};

/// Trait for reading the current calendar date, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Today's date in the user's local calendar (time of day is irrelevant)
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

//! Clock port. Supplies "today" so date rules can be tested with a fixed date.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// Current calendar date, no time-of-day.
    fn today(&self) -> NaiveDate;
}

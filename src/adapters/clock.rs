//! Implements Clock with the local system date.

use crate::ports::Clock;
use chrono::{Local, NaiveDate};

/// Wall-clock "today" in the process's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

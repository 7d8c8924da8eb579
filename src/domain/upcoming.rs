//! Upcoming-events rule shared by the listing and the assistant.
//!
//! An event is upcoming when its date is on or after yesterday. The one-day
//! look-back tolerates timezone skew between server and visitor.

use super::Event;
use chrono::{Days, NaiveDate};

/// First date that still counts as upcoming: `today - 1 day`.
pub fn upcoming_cutoff(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN)
}

pub fn is_upcoming(event: &Event, today: NaiveDate) -> bool {
    event.date >= upcoming_cutoff(today)
}

/// Merge seed and store events (seed first), keep upcoming ones, order by date.
///
/// The sort is stable: events sharing a date keep their merge order.
pub fn merge_upcoming(seed: &[Event], stored: Vec<Event>, today: NaiveDate) -> Vec<Event> {
    let mut events: Vec<Event> = seed
        .iter()
        .cloned()
        .chain(stored)
        .filter(|e| is_upcoming(e, today))
        .collect();
    events.sort_by_key(|e| e.date);
    events
}

//! Event card helpers: human date and "add to Google Calendar" link.

use crate::domain::Event;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use reqwest::Url;

const GOOGLE_CALENDAR_URL: &str = "https://www.google.com/calendar/render";
const CALENDAR_STAMP: &str = "%Y%m%dT%H%M%S";

/// Every event is shown as lasting two hours.
const EVENT_DURATION_HOURS: i64 = 2;

/// e.g. "Wednesday, January 10, 2024"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn starts_at(event: &Event) -> NaiveDateTime {
    let time = NaiveTime::parse_from_str(&event.time, "%H:%M").unwrap_or(NaiveTime::MIN);
    event.date.and_time(time)
}

/// Google Calendar template link for `event`.
///
/// Times are floating (no `Z` suffix): events carry no timezone, so the
/// calendar interprets them in the viewer's own zone.
pub fn google_calendar_link(event: &Event) -> Option<String> {
    let start = starts_at(event);
    let end = start + TimeDelta::hours(EVENT_DURATION_HOURS);
    let dates = format!("{}/{}", start.format(CALENDAR_STAMP), end.format(CALENDAR_STAMP));
    Url::parse_with_params(
        GOOGLE_CALENDAR_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", event.title.as_str()),
            ("dates", dates.as_str()),
            ("details", event.description.as_str()),
            ("location", event.location.as_str()),
        ],
    )
    .ok()
    .map(String::from)
}

//! Form validation for event submissions and registrations.
//!
//! Forms hold raw text as typed by the user; validation collects every field
//! error before returning, so the UI can show them all at once.

use super::{Category, CollegeYear, NewEvent, NewRegistration, ValidationErrors};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("static time regex")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"));

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("static mobile regex"));

const COLLEGE_EMAIL_SUFFIX: &str = ".edu.in";

/// Raw organizer submission.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub location: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `H:mm` or `HH:mm`, 24-hour
    pub time: String,
    /// Category label, e.g. "Tech Talk"
    pub category: String,
}

/// Raw registration dialog input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub college_year: String,
    pub semester: String,
    pub email: String,
    pub mobile: String,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validate an event form. `today` bounds the earliest allowed date.
pub fn validate_event(form: &EventForm, today: NaiveDate) -> Result<NewEvent, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if char_len(&form.title) < 3 {
        errors.add("title", "Title must be at least 3 characters long.");
    }
    if char_len(&form.description) < 10 {
        errors.add(
            "description",
            "Description must be at least 10 characters long.",
        );
    }
    if char_len(&form.location) < 2 {
        errors.add("location", "Location is required.");
    }

    let date = if form.date.trim().is_empty() {
        errors.add("date", "A date for the event is required.");
        None
    } else {
        match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
            Ok(d) if d < today => {
                errors.add("date", "The event date cannot be in the past.");
                None
            }
            Ok(d) => Some(d),
            Err(_) => {
                errors.add("date", "Please enter the date as YYYY-MM-DD.");
                None
            }
        }
    };

    let time = normalize_time(&form.time);
    if time.is_none() {
        errors.add("time", "Please enter a valid time in HH:mm format.");
    }

    let category = Category::from_label(&form.category);
    if category.is_none() {
        errors.add("category", "Please select a category.");
    }

    match (date, time, category) {
        (Some(date), Some(time), Some(category)) if errors.is_empty() => Ok(NewEvent {
            title: form.title.clone(),
            date,
            time,
            location: form.location.clone(),
            description: form.description.clone(),
            category,
        }),
        _ => Err(errors),
    }
}

/// Accepts `H:mm` / `HH:mm` and returns the two-digit `HH:mm` form.
pub fn normalize_time(raw: &str) -> Option<String> {
    if !TIME_RE.is_match(raw) {
        return None;
    }
    let (hours, minutes) = raw.split_once(':')?;
    let hours: u8 = hours.parse().ok()?;
    Some(format!("{:02}:{}", hours, minutes))
}

/// Validate a registration for `event_id`, stamping it with `registered_at`.
pub fn validate_registration(
    event_id: &str,
    form: &RegistrationForm,
    registered_at: DateTime<Utc>,
) -> Result<NewRegistration, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if event_id.trim().is_empty() {
        errors.add("event_id", "An event must be selected.");
    }
    if char_len(&form.name) < 2 {
        errors.add("name", "Name must be at least 2 characters.");
    }

    let college_year = CollegeYear::from_label(&form.college_year);
    if college_year.is_none() {
        errors.add("college_year", "Please select your college year.");
    }

    let semester = form
        .semester
        .parse::<u8>()
        .ok()
        .filter(|s| (1..=8).contains(s));
    if semester.is_none() {
        errors.add("semester", "Please select your semester.");
    }

    if !EMAIL_RE.is_match(&form.email) {
        errors.add("email", "Please enter a valid email address.");
    } else if !form.email.ends_with(COLLEGE_EMAIL_SUFFIX) {
        errors.add("email", "Please use your official college email address.");
    }

    if !MOBILE_RE.is_match(&form.mobile) {
        errors.add("mobile", "Please enter a valid 10-digit mobile number.");
    }

    match (college_year, semester) {
        (Some(college_year), Some(semester)) if errors.is_empty() => Ok(NewRegistration {
            event_id: event_id.to_string(),
            name: form.name.clone(),
            college_year,
            semester,
            email: form.email.clone(),
            mobile: form.mobile.clone(),
            registered_at,
        }),
        _ => Err(errors),
    }
}

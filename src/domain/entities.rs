//! Domain entities. Pure data structures for the core business.
//!
//! No store/IO types here; adapters map their rows into these.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled campus activity.
///
/// Serialized field names are the payload contract handed to the assistant:
/// every field is present and none are renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date, no timezone (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Wall-clock time, 24-hour `HH:mm`, no timezone.
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Workshop,
    Seminar,
    Hackathon,
    Networking,
    #[serde(rename = "Tech Talk")]
    TechTalk,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Workshop,
        Category::Seminar,
        Category::Hackathon,
        Category::Networking,
        Category::TechTalk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Workshop => "Workshop",
            Category::Seminar => "Seminar",
            Category::Hackathon => "Hackathon",
            Category::Networking => "Networking",
            Category::TechTalk => "Tech Talk",
        }
    }

    /// Parse the display label (exact match, as offered by the UI).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated event submission. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: Category,
}

impl NewEvent {
    pub fn with_id(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeYear {
    #[serde(rename = "First Year")]
    First,
    #[serde(rename = "Second Year")]
    Second,
    #[serde(rename = "Third Year")]
    Third,
    #[serde(rename = "Fourth Year")]
    Fourth,
}

impl CollegeYear {
    pub const ALL: [CollegeYear; 4] = [
        CollegeYear::First,
        CollegeYear::Second,
        CollegeYear::Third,
        CollegeYear::Fourth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CollegeYear::First => "First Year",
            CollegeYear::Second => "Second Year",
            CollegeYear::Third => "Third Year",
            CollegeYear::Fourth => "Fourth Year",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|y| y.as_str() == label)
    }
}

impl fmt::Display for CollegeYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated registration, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub event_id: String,
    pub name: String,
    pub college_year: CollegeYear,
    /// 1..=8
    pub semester: u8,
    pub email: String,
    pub mobile: String,
    pub registered_at: DateTime<Utc>,
}

impl NewRegistration {
    pub fn with_id(self, id: String) -> Registration {
        Registration {
            id,
            event_id: self.event_id,
            name: self.name,
            college_year: self.college_year,
            semester: self.semester,
            email: self.email,
            mobile: self.mobile,
            registered_at: self.registered_at,
        }
    }
}

/// A stored registration for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub college_year: CollegeYear,
    pub semester: u8,
    pub email: String,
    pub mobile: String,
    pub registered_at: DateTime<Utc>,
}

/// Result of one question to the assistant. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

/// Listing filter. `category: None` means all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub search: String,
    pub category: Option<Category>,
}

impl EventQuery {
    /// Case-insensitive substring match on title or description, plus category.
    pub fn matches(&self, event: &Event) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = event.title.to_lowercase().contains(&needle)
            || event.description.to_lowercase().contains(&needle);
        let matches_category = self.category.is_none_or(|c| c == event.category);
        matches_search && matches_category
    }
}

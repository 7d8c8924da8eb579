//! Fakes for every port plus small builders. Compiled for unit tests only.

use crate::domain::{Category, DomainError, Event, NewEvent, NewRegistration, Registration};
use crate::ports::{AiPort, AuthPort, Clock, EventReaderPort, RegistrationPort, SubmissionPort};
use chrono::NaiveDate;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn event(id: &str, day: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        date: date(day),
        time: "10:00".to_string(),
        location: "Main Auditorium".to_string(),
        description: format!("Description of event {id}"),
        category: Category::Workshop,
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// In-memory store. `fail` makes every read return `DomainError::Store`.
#[derive(Default)]
pub struct FakeStore {
    pub events: Mutex<Vec<Event>>,
    pub registrations: Mutex<Vec<Registration>>,
    pub fail: bool,
    pub reads: AtomicUsize,
}

impl FakeStore {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl EventReaderPort for FakeStore {
    async fn list_events(&self) -> Result<Vec<Event>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Store("connection refused".to_string()));
        }
        let mut events = self.events.lock().unwrap().clone();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }
}

#[async_trait::async_trait]
impl SubmissionPort for FakeStore {
    async fn add_event(&self, event: NewEvent) -> Result<Event, DomainError> {
        let mut events = self.events.lock().unwrap();
        let stored = event.with_id(format!("doc-{}", events.len() + 1));
        events.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait::async_trait]
impl RegistrationPort for FakeStore {
    async fn add_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, DomainError> {
        let mut regs = self.registrations.lock().unwrap();
        let stored = registration.with_id(format!("reg-{}", regs.len() + 1));
        regs.push(stored.clone());
        Ok(stored)
    }
}

/// Records every call; replies with `reply` or fails when `reply` is `None`.
pub struct RecordingAi {
    pub reply: Option<String>,
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingAi {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> (String, String, String) {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait::async_trait]
impl AiPort for RecordingAi {
    async fn complete(
        &self,
        system_instructions: &str,
        context_payload: &str,
        question: &str,
    ) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push((
            system_instructions.to_string(),
            context_payload.to_string(),
            question.to_string(),
        ));
        self.reply
            .clone()
            .ok_or_else(|| DomainError::Ai("API error 500: upstream".to_string()))
    }
}

pub struct FakeDirectory {
    pub email: String,
    pub password: String,
}

#[async_trait::async_trait]
impl AuthPort for FakeDirectory {
    async fn verify_organizer(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        Ok(email == self.email && password == self.password)
    }
}

//! SQLite-backed document store via libsql. Implements the event and registration ports.
//!
//! Two collections share one database file (data/events.db):
//! `events` (seeded by organizer submissions) and `registrations`.
//! Ids are assigned here (UUID v4), never by callers.

use crate::domain::{Category, DomainError, Event, NewEvent, NewRegistration, Registration};
use crate::ports::{EventReaderPort, RegistrationPort, SubmissionPort};
use chrono::{NaiveDate, Utc};
use libsql::{Database, Row, params};
use std::path::Path;
use tracing::{debug, info};

const EVENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    location TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    created_at INTEGER NOT NULL
)"#;
const EVENTS_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_events_date ON events (date ASC)";

const REGISTRATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
    id TEXT PRIMARY KEY,
    event_id TEXT NOT NULL,
    name TEXT NOT NULL,
    college_year TEXT NOT NULL,
    semester INTEGER NOT NULL,
    email TEXT NOT NULL,
    mobile TEXT NOT NULL,
    registered_at TEXT NOT NULL
)"#;
const REGISTRATIONS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_registrations_event ON registrations (event_id)";

fn store_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Store(e.to_string())
}

/// SQLite repository. One database file (events.db) in the given base directory.
pub struct SqliteRepo {
    db: Database,
}

impl SqliteRepo {
    /// Connect to (or create) the SQLite database and ensure the schema exists.
    /// Call this once at startup; the returned repo is safe to share via Arc.
    ///
    /// Sets WAL mode and synchronous=NORMAL so listing reads do not block submissions.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(store_err)?;
        let db_path = base.join("events.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(store_err)?;
        let conn = db.connect().map_err(store_err)?;

        // PRAGMA returns a row, so use query and drain it (execute fails on returned rows).
        for pragma in ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"] {
            let mut rows = conn
                .query(pragma, ())
                .await
                .map_err(|e| DomainError::Store(format!("{} failed: {}", pragma, e)))?;
            while rows.next().await.map_err(store_err)?.is_some() {}
        }

        for ddl in [
            EVENTS_TABLE,
            EVENTS_INDEX,
            REGISTRATIONS_TABLE,
            REGISTRATIONS_INDEX,
        ] {
            conn.execute(ddl, ()).await.map_err(store_err)?;
        }

        info!(path = %db_path.display(), "SQLite event store connected (WAL)");

        Ok(Self { db })
    }

    fn row_to_event(row: &Row) -> Result<Event, DomainError> {
        let id: String = row.get(0).map_err(store_err)?;
        let date_raw: String = row.get(2).map_err(store_err)?;
        let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|e| {
            DomainError::Store(format!("event {}: bad date {:?}: {}", id, date_raw, e))
        })?;
        let category_raw: String = row.get(6).map_err(store_err)?;
        let category = Category::from_label(&category_raw).ok_or_else(|| {
            DomainError::Store(format!("event {}: unknown category {:?}", id, category_raw))
        })?;
        Ok(Event {
            title: row.get(1).map_err(store_err)?,
            date,
            time: row.get(3).map_err(store_err)?,
            location: row.get(4).map_err(store_err)?,
            description: row.get(5).map_err(store_err)?,
            category,
            id,
        })
    }
}

#[async_trait::async_trait]
impl EventReaderPort for SqliteRepo {
    async fn list_events(&self) -> Result<Vec<Event>, DomainError> {
        let conn = self.db.connect().map_err(store_err)?;
        let mut rows = conn
            .query(
                r#"
                SELECT id, title, date, time, location, description, category
                FROM events
                ORDER BY date ASC
                "#,
                (),
            )
            .await
            .map_err(store_err)?;
        let mut events = Vec::new();
        while let Some(row) = rows.next().await.map_err(store_err)? {
            events.push(Self::row_to_event(&row)?);
        }
        debug!(count = events.len(), "listed stored events");
        Ok(events)
    }
}

#[async_trait::async_trait]
impl SubmissionPort for SqliteRepo {
    async fn add_event(&self, event: NewEvent) -> Result<Event, DomainError> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = self.db.connect().map_err(store_err)?;
        conn.execute(
            r#"
            INSERT INTO events (id, title, date, time, location, description, category, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                id.as_str(),
                event.title.as_str(),
                event.date.format("%Y-%m-%d").to_string(),
                event.time.as_str(),
                event.location.as_str(),
                event.description.as_str(),
                event.category.as_str(),
                Utc::now().timestamp()
            ],
        )
        .await
        .map_err(store_err)?;
        info!(id = %id, title = %event.title, date = %event.date, "event stored");
        Ok(event.with_id(id))
    }
}

#[async_trait::async_trait]
impl RegistrationPort for SqliteRepo {
    async fn add_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, DomainError> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = self.db.connect().map_err(store_err)?;
        conn.execute(
            r#"
            INSERT INTO registrations
                (id, event_id, name, college_year, semester, email, mobile, registered_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                id.as_str(),
                registration.event_id.as_str(),
                registration.name.as_str(),
                registration.college_year.as_str(),
                i64::from(registration.semester),
                registration.email.as_str(),
                registration.mobile.as_str(),
                registration.registered_at.to_rfc3339()
            ],
        )
        .await
        .map_err(store_err)?;
        info!(id = %id, event_id = %registration.event_id, "registration stored");
        Ok(registration.with_id(id))
    }
}

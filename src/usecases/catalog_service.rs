//! Catalog service. Merges seed and stored events and applies the upcoming rule.
//!
//! Both the listing and the assistant read events through here, so they
//! agree on what "upcoming" means. They differ only in how a failed store
//! fetch is handled, which callers choose explicitly with [`FetchFallback`].

use crate::domain::{DomainError, Event, EventQuery, merge_upcoming};
use crate::ports::{Clock, EventReaderPort};
use crate::shared::SeedCatalog;
use std::sync::Arc;
use tracing::{debug, warn};

/// What to do when the event store cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFallback {
    /// Log and continue with seed events only. Used by the listing.
    SeedOnly,
    /// Fail the whole operation. Used by the assistant.
    Propagate,
}

pub struct CatalogService {
    store: Arc<dyn EventReaderPort>,
    seed: Arc<SeedCatalog>,
    clock: Arc<dyn Clock>,
}

impl CatalogService {
    pub fn new(
        store: Arc<dyn EventReaderPort>,
        seed: Arc<SeedCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, seed, clock }
    }

    /// Stored events, or an empty list under `SeedOnly` when the fetch fails.
    async fn stored_events(&self, fallback: FetchFallback) -> Result<Vec<Event>, DomainError> {
        match self.store.list_events().await {
            Ok(events) => Ok(events),
            Err(e) if fallback == FetchFallback::SeedOnly => {
                warn!(error = %e, "event store unavailable; showing seed events only");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Seed events then stored events, upcoming only, ordered by date.
    ///
    /// Re-fetches on every call; nothing is cached.
    pub async fn upcoming(&self, fallback: FetchFallback) -> Result<Vec<Event>, DomainError> {
        let stored = self.stored_events(fallback).await?;
        let today = self.clock.today();
        let events = merge_upcoming(self.seed.events(), stored, today);
        debug!(today = %today, count = events.len(), "merged upcoming events");
        Ok(events)
    }

    /// Upcoming events matching `query`, for the listing view.
    pub async fn list_upcoming(&self, query: &EventQuery) -> Result<Vec<Event>, DomainError> {
        let events = self.upcoming(FetchFallback::SeedOnly).await?;
        Ok(events.into_iter().filter(|e| query.matches(e)).collect())
    }

    /// Look up any known event by id, upcoming or not.
    pub async fn find_event(&self, id: &str) -> Result<Option<Event>, DomainError> {
        if let Some(e) = self.seed.events().iter().find(|e| e.id == id) {
            return Ok(Some(e.clone()));
        }
        let stored = self.stored_events(FetchFallback::SeedOnly).await?;
        Ok(stored.into_iter().find(|e| e.id == id))
    }
}

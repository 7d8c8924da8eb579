//! Organizer event submission: validate, then store.

use crate::domain::{DomainError, Event, EventForm, validate_event};
use crate::ports::{Clock, SubmissionPort};
use crate::usecases::auth_service::OrganizerSession;
use std::sync::Arc;
use tracing::info;

pub struct SubmissionService {
    store: Arc<dyn SubmissionPort>,
    clock: Arc<dyn Clock>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionPort>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate `form` and add it to the `events` collection.
    ///
    /// Requires a logged-in organizer. Returns the stored event with its new id.
    pub async fn submit(
        &self,
        session: &OrganizerSession,
        form: &EventForm,
    ) -> Result<Event, DomainError> {
        let new_event =
            validate_event(form, self.clock.today()).map_err(DomainError::Validation)?;
        let event = self.store.add_event(new_event).await?;
        info!(
            organizer = %session.email(),
            id = %event.id,
            title = %event.title,
            "event submitted"
        );
        Ok(event)
    }
}

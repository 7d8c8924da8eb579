//! Event registration: validate the dialog input, then store it.

use crate::domain::{DomainError, Registration, RegistrationForm, validate_registration};
use crate::ports::RegistrationPort;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub struct RegistrationService {
    store: Arc<dyn RegistrationPort>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn RegistrationPort>) -> Self {
        Self { store }
    }

    /// Register the student described by `form` for `event_id`.
    pub async fn register(
        &self,
        event_id: &str,
        form: &RegistrationForm,
    ) -> Result<Registration, DomainError> {
        let registration =
            validate_registration(event_id, form, Utc::now()).map_err(DomainError::Validation)?;
        let stored = self.store.add_registration(registration).await?;
        info!(id = %stored.id, event_id = %stored.event_id, "registered for event");
        Ok(stored)
    }
}

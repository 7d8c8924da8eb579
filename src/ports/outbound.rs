//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Event, NewEvent, NewRegistration, Registration};

/// Read side of the `events` collection.
#[async_trait::async_trait]
pub trait EventReaderPort: Send + Sync {
    /// Fetch every stored event, ordered ascending by date.
    ///
    /// Order among events sharing a date is unspecified. No pagination: the
    /// full collection is returned on each call.
    async fn list_events(&self) -> Result<Vec<Event>, DomainError>;
}

/// Write side of the `events` collection. Used by organizer submissions.
#[async_trait::async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Store a validated event. The store assigns and returns the id.
    async fn add_event(&self, event: NewEvent) -> Result<Event, DomainError>;
}

/// The `registrations` collection.
#[async_trait::async_trait]
pub trait RegistrationPort: Send + Sync {
    async fn add_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, DomainError>;
}

/// Hosted text completion. Stateless per call: no conversation memory.
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Complete `question` given fixed instructions and a context payload.
    ///
    /// Grounding in `context_payload` is best-effort; the model is asked,
    /// not forced, to stay within it.
    async fn complete(
        &self,
        system_instructions: &str,
        context_payload: &str,
        question: &str,
    ) -> Result<String, DomainError>;
}

/// Organizer credential check.
#[async_trait::async_trait]
pub trait AuthPort: Send + Sync {
    async fn verify_organizer(&self, email: &str, password: &str) -> Result<bool, DomainError>;
}

//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod upcoming;
pub mod validation;

pub use entities::{
    Answer, Category, CollegeYear, Event, EventQuery, NewEvent, NewRegistration, Registration,
};
pub use errors::{DomainError, FieldError, ValidationErrors};
pub use upcoming::{is_upcoming, merge_upcoming, upcoming_cutoff};
pub use validation::{EventForm, RegistrationForm, validate_event, validate_registration};

//! Application use cases. Orchestrate domain logic via ports.

pub mod answer_service;
pub mod auth_service;
pub mod catalog_service;
pub mod registration_service;
pub mod submission_service;

pub use answer_service::AnswerService;
pub use auth_service::{AuthService, OrganizerSession};
pub use catalog_service::{CatalogService, FetchFallback};
pub use registration_service::RegistrationService;
pub use submission_service::SubmissionService;

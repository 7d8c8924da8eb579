//! Implements AuthPort from credentials supplied by configuration.
//!
//! Holds at most one organizer account. With none configured every login is refused.

use crate::domain::DomainError;
use crate::ports::AuthPort;
use async_trait::async_trait;
use tracing::debug;

/// Organizer accounts known at startup.
pub struct StaticOrganizerDirectory {
    organizer: Option<(String, String)>,
}

impl StaticOrganizerDirectory {
    /// `organizer` is `(email, password)`; `None` disables organizer login.
    pub fn new(organizer: Option<(String, String)>) -> Self {
        Self { organizer }
    }

    pub fn is_enabled(&self) -> bool {
        self.organizer.is_some()
    }
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[async_trait]
impl AuthPort for StaticOrganizerDirectory {
    async fn verify_organizer(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        let Some((known_email, known_password)) = &self.organizer else {
            debug!("organizer login attempted but no organizer is configured");
            return Ok(false);
        };
        let email_ok = known_email.eq_ignore_ascii_case(email.trim());
        let password_ok = constant_time_eq(known_password.as_bytes(), password.as_bytes());
        Ok(email_ok && password_ok)
    }
}

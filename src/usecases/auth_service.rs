//! Organizer login. Delegates the credential check to AuthPort.

use crate::domain::DomainError;
use crate::ports::AuthPort;
use std::sync::Arc;
use tracing::{info, warn};

/// Proof of a successful organizer login. Only [`AuthService::login`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerSession {
    email: String,
}

impl OrganizerSession {
    pub fn email(&self) -> &str {
        &self.email
    }
}

pub struct AuthService {
    auth: Arc<dyn AuthPort>,
}

impl AuthService {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    /// Check organizer credentials and open a session.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<OrganizerSession, DomainError> {
        if self.auth.verify_organizer(email, password).await? {
            info!(email = %email.trim(), "organizer logged in");
            Ok(OrganizerSession {
                email: email.trim().to_string(),
            })
        } else {
            warn!(email = %email.trim(), "organizer login rejected");
            Err(DomainError::Auth("invalid email or password".into()))
        }
    }
}

#[cfg(test)]
pub(crate) fn test_session(email: &str) -> OrganizerSession {
    OrganizerSession {
        email: email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDirectory;

    fn service() -> AuthService {
        AuthService::new(Arc::new(FakeDirectory {
            email: "org@college.edu.in".to_string(),
            password: "pw".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_login_success() {
        let session = service().login("org@college.edu.in", "pw").await.unwrap();
        assert_eq!(session.email(), "org@college.edu.in");
    }

    #[tokio::test]
    async fn test_login_failure() {
        let err = service().login("org@college.edu.in", "nope").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(_)));
    }
}

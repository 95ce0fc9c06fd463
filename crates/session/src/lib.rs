//! Single-slot session state for the demo platform.
//!
//! At most one identity is logged in at a time; a successful login replaces
//! whatever was there before. The context is created once at the application
//! root and handed down explicitly, never reached through a global.

use models::{CredentialRecord, Identity, Role};
use thiserror::Error;
use tokio::sync::RwLock;

pub type Result<T> = std::result::Result<T, LoginError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Deliberately generic: never reveals which field was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Holds the credential records and the single in-memory identity slot.
pub struct SessionContext {
    credentials: Vec<CredentialRecord>,
    user: RwLock<Option<Identity>>,
}

impl SessionContext {
    pub fn new(credentials: impl Into<Vec<CredentialRecord>>) -> Self {
        Self {
            credentials: credentials.into(),
            user: RwLock::new(None),
        }
    }

    /// Compares against the fixed credential pairs. Plain string equality on
    /// both fields; the demo carries no real secrets.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let matched = self
            .credentials
            .iter()
            .find(|c| c.email == email && c.password == password)
            .ok_or(LoginError::InvalidCredentials)?;

        let identity = Identity {
            email: matched.email.to_string(),
            role: matched.role,
            name: display_name(matched.role).to_string(),
        };

        let mut slot = self.user.write().await;
        *slot = Some(identity.clone());
        Ok(identity)
    }

    /// Clears the slot unconditionally. Idempotent.
    pub async fn logout(&self) {
        let mut slot = self.user.write().await;
        *slot = None;
    }

    pub async fn current(&self) -> Option<Identity> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }
}

fn display_name(role: Role) -> &'static str {
    match role {
        Role::Investor => "Demo Investor",
        Role::Admin => "Admin User",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SessionContext {
        SessionContext::new(demo_data::demo_credentials())
    }

    #[tokio::test]
    async fn test_both_demo_pairs_log_in_with_their_role() {
        let session = context();

        let investor = session.login("investor@demo.com", "demo123").await.unwrap();
        assert_eq!(investor.role, Role::Investor);
        assert_eq!(investor.name, "Demo Investor");

        let admin = session.login("admin@demo.com", "admin123").await.unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.name, "Admin User");
    }

    #[tokio::test]
    async fn test_any_other_combination_fails_generically() {
        let session = context();

        let cases = [
            ("investor@demo.com", "wrong"),
            ("admin@demo.com", "demo123"),
            ("nobody@demo.com", "demo123"),
            ("", ""),
        ];
        for (email, password) in cases {
            let err = session.login(email, password).await.unwrap_err();
            assert_eq!(err, LoginError::InvalidCredentials);
            assert_eq!(err.to_string(), "Invalid email or password");
        }
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_login_replaces_previous_identity() {
        let session = context();
        session.login("investor@demo.com", "demo123").await.unwrap();
        session.login("admin@demo.com", "admin123").await.unwrap();

        let current = session.current().await.unwrap();
        assert_eq!(current.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let session = context();
        session.login("investor@demo.com", "demo123").await.unwrap();
        assert!(session.is_authenticated().await);

        session.logout().await;
        session.logout().await;
        assert!(!session.is_authenticated().await);
        assert_eq!(session.current().await, None);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_identity() {
        let session = context();
        session.login("investor@demo.com", "demo123").await.unwrap();
        let _ = session.login("investor@demo.com", "typo").await;

        assert_eq!(session.current().await.unwrap().role, Role::Investor);
    }
}

//! Identity provider seam.
//!
//! Checking a password against a real identity store is an external
//! concern. The [`Authenticator`](crate::Authenticator) only needs a verdict.

use crate::credentials::{Credentials, Registration};
use crate::error::AuthResult;
use crate::session::UserProfile;

/// Decides whether credentials are genuine.
///
/// Implementations receive forms that have already passed validation.
pub trait IdentityProvider: Send + Sync {
    /// Provider name, for logs.
    fn name(&self) -> &str;

    /// Check a login.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`](crate::AuthError::Rejected) if the
    /// credentials are not accepted.
    fn authenticate(&self, credentials: &Credentials) -> AuthResult<UserProfile>;

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`](crate::AuthError::Rejected) if the
    /// account cannot be created.
    fn enroll(&self, registration: &Registration) -> AuthResult<UserProfile>;
}

/// Accepts every well-formed form and stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveProvider;

impl IdentityProvider for PermissiveProvider {
    fn name(&self) -> &str {
        "permissive"
    }

    fn authenticate(&self, credentials: &Credentials) -> AuthResult<UserProfile> {
        Ok(UserProfile::new(credentials.username.clone()))
    }

    fn enroll(&self, registration: &Registration) -> AuthResult<UserProfile> {
        Ok(UserProfile::new(registration.username.clone()).with_email(registration.email.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_provider_accepts() {
        let profile = PermissiveProvider
            .authenticate(&Credentials::new("alice", "x"))
            .unwrap();
        assert_eq!(profile.username, "alice");

        let profile = PermissiveProvider
            .enroll(&Registration::new("bob", "pw", "pw").with_email("bob@example.com"))
            .unwrap();
        assert_eq!(profile.email.as_deref(), Some("bob@example.com"));
    }
}

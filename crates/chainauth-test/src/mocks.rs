//! Mock identity providers for testing.

use std::sync::{Arc, Mutex};

use chainauth_session::{
    AuthError, AuthResult, Credentials, IdentityProvider, Registration, Role, UserProfile,
};

/// Refuses every login and registration.
#[derive(Debug, Clone)]
pub struct RejectingProvider {
    reason: String,
}

impl RejectingProvider {
    /// Create a provider that rejects with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn rejection(&self) -> AuthError {
        AuthError::Rejected {
            reason: self.reason.clone(),
        }
    }
}

impl Default for RejectingProvider {
    fn default() -> Self {
        Self::new("invalid credentials")
    }
}

impl IdentityProvider for RejectingProvider {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn authenticate(&self, _credentials: &Credentials) -> AuthResult<UserProfile> {
        Err(self.rejection())
    }

    fn enroll(&self, _registration: &Registration) -> AuthResult<UserProfile> {
        Err(self.rejection())
    }
}

/// Accepts everything and remembers which usernames it saw.
///
/// Uses `std::sync::Mutex` so it can be shared across threads without a
/// runtime.
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    logins: Arc<Mutex<Vec<String>>>,
    enrollments: Arc<Mutex<Vec<String>>>,
    role: Role,
}

impl RecordingProvider {
    /// Create a new recording provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant this role to every profile returned.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Usernames passed to `authenticate`, in order.
    #[must_use]
    pub fn logins(&self) -> Vec<String> {
        self.logins.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Usernames passed to `enroll`, in order.
    #[must_use]
    pub fn enrollments(&self) -> Vec<String> {
        self.enrollments
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

impl IdentityProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    fn authenticate(&self, credentials: &Credentials) -> AuthResult<UserProfile> {
        if let Ok(mut guard) = self.logins.lock() {
            guard.push(credentials.username.clone());
        }
        Ok(UserProfile::new(credentials.username.clone()).with_role(self.role))
    }

    fn enroll(&self, registration: &Registration) -> AuthResult<UserProfile> {
        if let Ok(mut guard) = self.enrollments.lock() {
            guard.push(registration.username.clone());
        }
        Ok(UserProfile::new(registration.username.clone())
            .with_email(registration.email.clone())
            .with_role(self.role))
    }
}

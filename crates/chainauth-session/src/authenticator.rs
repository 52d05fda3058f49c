//! Authenticator - records logins, registrations and logouts.

use std::sync::Arc;

use chainauth_audit::{AuditEntry, AuditLedger};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::actions;
use crate::credentials::{Credentials, Registration};
use crate::error::{AuthError, AuthResult};
use crate::provider::IdentityProvider;
use crate::session::{Role, SessionContext};

/// Dashboard view of a session and the ledger behind it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Logged-in user.
    pub username: String,
    /// Contact address, if known.
    pub email: Option<String>,
    /// Account role.
    pub role: Role,
    /// When the user logged in.
    pub last_login: DateTime<Utc>,
    /// Entries in the ledger.
    pub total_actions: usize,
    /// Whether the ledger verifies.
    pub chain_intact: bool,
}

/// Authentication front door.
///
/// Validates forms, defers the credential decision to an
/// [`IdentityProvider`], and writes the outcome to the audit ledger.
pub struct Authenticator {
    ledger: Arc<AuditLedger>,
    provider: Arc<dyn IdentityProvider>,
}

impl Authenticator {
    /// Create an authenticator over a shared ledger.
    #[must_use]
    pub fn new(ledger: Arc<AuditLedger>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { ledger, provider }
    }

    /// The ledger this authenticator records into.
    #[must_use]
    pub fn ledger(&self) -> &Arc<AuditLedger> {
        &self.ledger
    }

    /// Log in.
    ///
    /// Nothing is recorded if the form is incomplete. A provider rejection
    /// is recorded as [`actions::LOGIN_REJECTED`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] for an incomplete form,
    /// [`AuthError::Rejected`] if the provider refuses, or
    /// [`AuthError::Audit`] if the ledger refuses the entry.
    pub fn login(&self, credentials: &Credentials) -> AuthResult<SessionContext> {
        credentials.validate()?;

        let user = match self.provider.authenticate(credentials) {
            Ok(user) => user,
            Err(e) => return Err(self.reject(&credentials.username, actions::LOGIN_REJECTED, e)),
        };

        let session = SessionContext::new(user);
        let _span = session.span().entered();
        self.ledger.record(session.actor(), actions::LOGIN)?;
        info!(provider = self.provider.name(), "User logged in");

        Ok(session)
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] or
    /// [`AuthError::PasswordMismatch`] for an invalid form,
    /// [`AuthError::Rejected`] if the provider refuses, or
    /// [`AuthError::Audit`] if the ledger refuses the entry.
    pub fn register(&self, registration: &Registration) -> AuthResult<SessionContext> {
        registration.validate()?;

        let user = match self.provider.enroll(registration) {
            Ok(user) => user,
            Err(e) => {
                return Err(self.reject(
                    &registration.username,
                    actions::REGISTRATION_REJECTED,
                    e,
                ));
            },
        };

        let session = SessionContext::new(user);
        let _span = session.span().entered();
        self.ledger.record(session.actor(), actions::REGISTER)?;
        info!(provider = self.provider.name(), "Account created");

        Ok(session)
    }

    /// Log out, ending the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Audit`] if the ledger refuses the entry.
    pub fn logout(&self, session: SessionContext) -> AuthResult<AuditEntry> {
        let _span = session.span().entered();
        let entry = self.ledger.record(session.actor(), actions::LOGOUT)?;
        info!("User logged out");
        Ok(entry)
    }

    /// Record an action taken by the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Audit`] if `action` is empty.
    pub fn record_action(
        &self,
        session: &SessionContext,
        action: impl Into<String>,
    ) -> AuthResult<AuditEntry> {
        Ok(self.ledger.record(session.actor(), action)?)
    }

    /// Summarize a session for display.
    #[must_use]
    pub fn summary(&self, session: &SessionContext) -> SessionSummary {
        SessionSummary {
            username: session.user.username.clone(),
            email: session.user.email.clone(),
            role: session.user.role,
            last_login: session.user.last_login,
            total_actions: self.ledger.len(),
            chain_intact: self.ledger.verify().is_valid(),
        }
    }

    /// Record a provider rejection and hand back the error to return.
    fn reject(&self, username: &str, action: &str, error: AuthError) -> AuthError {
        warn!(
            provider = self.provider.name(),
            user = username,
            error = %error,
            "Identity provider rejected request"
        );
        if let Err(e) = self.ledger.record(username, action) {
            return e.into();
        }
        error
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("provider", &self.provider.name())
            .field("ledger", &self.ledger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::PermissiveProvider;
    use crate::session::UserProfile;

    struct Closed;

    impl IdentityProvider for Closed {
        fn name(&self) -> &str {
            "closed"
        }

        fn authenticate(&self, _: &Credentials) -> AuthResult<UserProfile> {
            Err(AuthError::Rejected {
                reason: "closed".to_string(),
            })
        }

        fn enroll(&self, _: &Registration) -> AuthResult<UserProfile> {
            Err(AuthError::Rejected {
                reason: "closed".to_string(),
            })
        }
    }

    fn permissive() -> Authenticator {
        Authenticator::new(Arc::new(AuditLedger::new()), Arc::new(PermissiveProvider))
    }

    #[test]
    fn test_login_records_entry() {
        let auth = permissive();
        let session = auth.login(&Credentials::new("alice", "pw")).unwrap();

        let entries = auth.ledger().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].actor, "alice");
        assert_eq!(entries[0].action, actions::LOGIN);
        assert_eq!(session.user.username, "alice");
    }

    #[test]
    fn test_invalid_form_records_nothing() {
        let auth = permissive();
        assert!(matches!(
            auth.login(&Credentials::new("alice", "")),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            auth.register(&Registration::new("bob", "a", "b")),
            Err(AuthError::PasswordMismatch)
        ));
        assert!(auth.ledger().is_empty());
    }

    #[test]
    fn test_rejection_is_recorded() {
        let auth = Authenticator::new(Arc::new(AuditLedger::new()), Arc::new(Closed));

        let err = auth.login(&Credentials::new("mallory", "guess")).unwrap_err();
        assert!(matches!(err, AuthError::Rejected { .. }));

        let err = auth
            .register(&Registration::new("mallory", "pw", "pw"))
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected { .. }));

        let recorded: Vec<String> = auth
            .ledger()
            .entries()
            .into_iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(
            recorded,
            vec![actions::LOGIN_REJECTED, actions::REGISTRATION_REJECTED]
        );
    }

    #[test]
    fn test_empty_action_is_audit_error() {
        let auth = permissive();
        let session = auth.login(&Credentials::new("alice", "pw")).unwrap();
        assert!(matches!(
            auth.record_action(&session, ""),
            Err(AuthError::Audit(_))
        ));
        assert_eq!(auth.ledger().len(), 1);

        auth.record_action(&session, " ").unwrap();
        assert_eq!(auth.ledger().len(), 2);
    }

    #[test]
    fn test_summary() {
        let auth = permissive();
        let session = auth
            .register(&Registration::new("bob", "pw", "pw").with_email("bob@example.com"))
            .unwrap();
        auth.record_action(&session, "Permission Update").unwrap();

        let summary = auth.summary(&session);
        assert_eq!(summary.username, "bob");
        assert_eq!(summary.email.as_deref(), Some("bob@example.com"));
        assert_eq!(summary.total_actions, 2);
        assert!(summary.chain_intact);
    }
}

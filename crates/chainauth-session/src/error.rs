//! Authentication error types.

use chainauth_audit::AuditError;
use thiserror::Error;

/// Errors that can occur during login, registration or logout.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password left empty.
    #[error("Username and password are required")]
    MissingCredentials,

    /// Registration password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The identity provider refused the request.
    #[error("authentication rejected: {reason}")]
    Rejected {
        /// Provider-supplied reason.
        reason: String,
    },

    /// Recording to the audit ledger failed.
    #[error("audit error: {0}")]
    Audit(#[from] AuditError),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

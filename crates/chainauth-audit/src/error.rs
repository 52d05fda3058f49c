//! Audit-related error types.

use thiserror::Error;

/// Why an append was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Actor was empty.
    #[error("actor must not be empty")]
    EmptyActor,

    /// Action was empty.
    #[error("action must not be empty")]
    EmptyAction,
}

/// Errors that can occur when appending to the audit ledger.
///
/// Integrity violations are not errors: they are returned by
/// [`AuditLedger::verify`](crate::AuditLedger::verify) as data.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The entry descriptor was rejected before the ledger was touched.
    #[error("invalid audit entry: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

//! Prelude module - commonly used types for convenient import.
//!
//! Use `use chainauth_audit::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use chainauth_audit::prelude::*;
//!
//! let ledger = AuditLedger::with_algorithm(HashAlgorithm::Sha256);
//! ledger.record("bob", "Permission Update").unwrap();
//!
//! match ledger.verify() {
//!     ChainVerification::Valid { entries_verified } => assert_eq!(entries_verified, 1),
//!     ChainVerification::Invalid(violation) => panic!("tampered: {violation}"),
//! }
//! ```

// Errors
pub use crate::{AuditError, AuditResult, ValidationError};

// Entries and the ledger
pub use crate::{AuditEntry, AuditLedger};

// Verification
pub use crate::{ChainVerification, IntegrityViolation, ViolationKind, verify_entries};

// Markers
pub use crate::{ContentHash, HashAlgorithm, IntegrityHasher};

//! Chainauth Audit - Append-only, hash-chained audit ledger.
//!
//! This crate provides:
//! - Immutable audit entries recording who did what and when
//! - Chain-linked entries (each carries the marker of the previous one)
//! - Chain integrity verification that pinpoints the first tampered entry
//!
//! # Security Model
//!
//! Every audit entry is:
//! - Numbered (1-based, gap-free)
//! - Timestamped (non-decreasing)
//! - Linked to the previous entry via its marker
//! - Sealed with a marker digested over all of the above
//!
//! Altering a stored field breaks that entry's marker. Swapping, removing
//! or substituting entries breaks the linkage. Both are reported by
//! [`AuditLedger::verify`].
//!
//! # Example
//!
//! ```
//! use chainauth_audit::{AuditLedger, ContentHash};
//!
//! let ledger = AuditLedger::new();
//!
//! let first = ledger.record("alice", "User Login").unwrap();
//! let second = ledger.record("alice", "Data Access").unwrap();
//!
//! assert_eq!(first.sequence, 1);
//! assert_eq!(first.previous_marker, ContentHash::GENESIS);
//! assert_eq!(second.previous_marker, first.marker);
//!
//! // Verify chain integrity
//! assert!(ledger.verify().is_valid());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod entry;
mod error;
mod ledger;
mod verify;

pub use entry::AuditEntry;
pub use error::{AuditError, AuditResult, ValidationError};
pub use ledger::AuditLedger;
pub use verify::{ChainVerification, IntegrityViolation, ViolationKind, verify_entries};

// Re-export the marker types so callers need only this crate.
pub use chainauth_crypto::{ContentHash, HashAlgorithm, IntegrityHasher};

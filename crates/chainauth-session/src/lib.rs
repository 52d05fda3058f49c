//! Chainauth Session - Authentication front door for the audit ledger.
//!
//! This crate provides:
//! - Credential and registration form validation
//! - The [`IdentityProvider`] seam where real credential checks plug in
//! - An [`Authenticator`] that records every login, registration and logout
//!   into a shared [`AuditLedger`](chainauth_audit::AuditLedger)
//! - An explicit [`SessionContext`] handed to callers instead of ambient
//!   logged-in state
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chainauth_audit::AuditLedger;
//! use chainauth_session::{Authenticator, Credentials, PermissiveProvider, actions};
//!
//! let ledger = Arc::new(AuditLedger::new());
//! let auth = Authenticator::new(Arc::clone(&ledger), Arc::new(PermissiveProvider));
//!
//! let session = auth.login(&Credentials::new("alice", "hunter2")).unwrap();
//! auth.record_action(&session, "Data Access").unwrap();
//! auth.logout(session).unwrap();
//!
//! let trail: Vec<String> = ledger.entries().into_iter().map(|e| e.action).collect();
//! assert_eq!(trail, [actions::LOGIN, "Data Access", actions::LOGOUT]);
//! assert!(ledger.verify().is_valid());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod actions;

mod authenticator;
mod credentials;
mod error;
mod provider;
mod session;

pub use authenticator::{Authenticator, SessionSummary};
pub use credentials::{Credentials, Registration};
pub use error::{AuthError, AuthResult};
pub use provider::{IdentityProvider, PermissiveProvider};
pub use session::{Role, SessionContext, UserProfile};

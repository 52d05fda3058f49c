//! Chainauth Test - Shared test utilities for the chainauth crates.
//!
//! Fixtures, mock identity providers and temp-dir helpers, intended for use
//! as a dev-dependency from integration tests.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! chainauth-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust,ignore
//! use chainauth_test::{RejectingProvider, test_credentials};
//!
//! #[test]
//! fn test_rejected_login_is_recorded() {
//!     let auth = Authenticator::new(ledger, Arc::new(RejectingProvider::new("locked")));
//!     assert!(auth.login(&test_credentials()).is_err());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;

//! Chainauth Crypto - Integrity digests for the audit chain.
//!
//! This crate provides:
//! - [`ContentHash`], the 32-byte marker attached to every audit entry
//! - The [`IntegrityHasher`] seam the ledger digests through
//! - BLAKE3 (default) and SHA-256 implementations, selectable by [`HashAlgorithm`]
//!
//! # Example
//!
//! ```
//! use chainauth_crypto::{ContentHash, HashAlgorithm, IntegrityHasher};
//!
//! let hasher = HashAlgorithm::Blake3.hasher();
//! let marker = hasher.digest(b"alice logged in");
//!
//! // Digests are deterministic
//! assert_eq!(marker, hasher.digest(b"alice logged in"));
//! assert_ne!(marker, ContentHash::GENESIS);
//! println!("marker: {}", marker.abbreviated(16, 8));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod hash;
mod hasher;

pub use error::{CryptoError, CryptoResult};
pub use hash::ContentHash;
pub use hasher::{Blake3Hasher, HashAlgorithm, IntegrityHasher, Sha256Hasher};

//! Prelude module - commonly used types for convenient import.
//!
//! Use `use chainauth_crypto::prelude::*;` to import all essential types.

// Errors
pub use crate::{CryptoError, CryptoResult};

// Markers
pub use crate::ContentHash;

// Hashers
pub use crate::{Blake3Hasher, HashAlgorithm, IntegrityHasher, Sha256Hasher};

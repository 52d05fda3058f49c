//! Pluggable integrity hashers.
//!
//! The ledger never calls a digest function directly; it goes through
//! [`IntegrityHasher`], so the algorithm can be chosen by configuration and
//! recorded alongside exported trails.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CryptoError;
use crate::hash::ContentHash;

/// A pure, deterministic digest over arbitrary bytes.
///
/// Implementations must be cryptographically strong (preimage and collision
/// resistant), free of side effects, and must accept empty input.
pub trait IntegrityHasher: Send + Sync + fmt::Debug {
    /// Which algorithm this hasher implements.
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest `bytes` into a marker.
    fn digest(&self, bytes: &[u8]) -> ContentHash;
}

/// BLAKE3 hasher (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl IntegrityHasher for Blake3Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Blake3
    }

    fn digest(&self, bytes: &[u8]) -> ContentHash {
        ContentHash::hash(bytes)
    }
}

/// SHA-256 hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl IntegrityHasher for Sha256Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }

    fn digest(&self, bytes: &[u8]) -> ContentHash {
        let out: [u8; 32] = Sha256::digest(bytes).into();
        ContentHash::from_bytes(out)
    }
}

/// Supported marker digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// BLAKE3.
    #[default]
    Blake3,
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Construct a shared hasher for this algorithm.
    #[must_use]
    pub fn hasher(self) -> Arc<dyn IntegrityHasher> {
        match self {
            Self::Blake3 => Arc::new(Blake3Hasher),
            Self::Sha256 => Arc::new(Sha256Hasher),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blake3 => "blake3",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(Self::Blake3),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(CryptoError::UnknownAlgorithm(other.to_string())),
        }
    }
}

//! Cryptographic error types.

use thiserror::Error;

/// Errors that can occur when decoding markers or selecting a hasher.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid digest length.
    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// Invalid hex encoding.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(#[from] hex::FromHexError),

    /// Hash algorithm name not recognised.
    #[error("unknown hash algorithm: {0} (expected blake3 or sha256)")]
    UnknownAlgorithm(String),
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

//! Integrity markers.
//!
//! A marker is a 32-byte digest. Audit entries carry two of them: their own
//! marker and the marker of the entry before them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CryptoError, CryptoResult};

/// Length of a marker in bytes.
const MARKER_LEN: usize = 32;

/// A 32-byte content digest.
///
/// Used for:
/// - Audit chain linking (each entry carries the marker of the previous one)
/// - Tamper detection (markers are recomputed during verification)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; MARKER_LEN]);

impl ContentHash {
    /// The predecessor marker of the first entry in a ledger.
    pub const GENESIS: Self = Self([0u8; MARKER_LEN]);

    /// BLAKE3 digest of arbitrary data.
    #[must_use]
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// BLAKE3 digest of several chunks, equivalent to hashing their concatenation.
    #[must_use]
    pub fn hash_multi(parts: &[&[u8]]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// The all-zero marker (same value as [`ContentHash::GENESIS`]).
    #[must_use]
    pub const fn zero() -> Self {
        Self::GENESIS
    }

    /// Check if this is the all-zero marker.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; MARKER_LEN]
    }

    /// Get the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MARKER_LEN] {
        &self.0
    }

    /// Create from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; MARKER_LEN]) -> Self {
        Self(bytes)
    }

    /// Try to create from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidLength`] if the slice is not exactly 32 bytes.
    pub fn try_from_slice(slice: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; MARKER_LEN] =
            slice.try_into().map_err(|_| CryptoError::InvalidLength {
                expected: MARKER_LEN,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Encode as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decode from hex.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid hex or not 32 bytes.
    pub fn from_hex(s: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(s)?;
        Self::try_from_slice(&bytes)
    }

    /// Shortened hex form: the first `prefix` and last `suffix` hex digits
    /// joined by `...`.
    ///
    /// Falls back to the full hex string when the two parts would overlap.
    ///
    /// ```
    /// use chainauth_crypto::ContentHash;
    ///
    /// let marker = ContentHash::hash(b"entry");
    /// let short = marker.abbreviated(16, 8);
    /// assert_eq!(short.len(), 16 + 3 + 8);
    /// assert!(marker.to_hex().starts_with(&short[..16]));
    /// ```
    #[must_use]
    pub fn abbreviated(&self, prefix: usize, suffix: usize) -> String {
        let hex = self.to_hex();
        if prefix.saturating_add(suffix) >= hex.len() {
            return hex;
        }
        let tail_start = hex.len().saturating_sub(suffix);
        format!("{}...{}", &hex[..prefix], &hex[tail_start..])
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for ContentHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Default for ContentHash {
    fn default() -> Self {
        Self::GENESIS
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; MARKER_LEN]> for ContentHash {
    fn from(bytes: [u8; MARKER_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<ContentHash> for [u8; MARKER_LEN] {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_basic() {
        let data = b"hello world";
        let hash = ContentHash::hash(data);

        assert_eq!(hash, ContentHash::hash(data));
        assert_ne!(hash, ContentHash::hash(b"different"));
    }

    #[test]
    fn test_hash_multi_matches_concatenation() {
        let parts: &[&[u8]] = &[b"alice", b":", b"login"];
        assert_eq!(
            ContentHash::hash_multi(parts),
            ContentHash::hash(b"alice:login")
        );
    }

    #[test]
    fn test_genesis_is_zero() {
        assert!(ContentHash::GENESIS.is_zero());
        assert_eq!(ContentHash::zero(), ContentHash::GENESIS);
        assert_eq!(ContentHash::default(), ContentHash::GENESIS);
        assert!(!ContentHash::hash(b"").is_zero());
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        let err = ContentHash::from_hex("abcd").unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidLength {
                expected: 32,
                actual: 2
            }
        ));
        assert!(ContentHash::from_hex("not hex at all").is_err());
    }

    #[test]
    fn test_hex_encoding() {
        let hash = ContentHash::hash(b"test");
        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(ContentHash::from_hex(&hex).unwrap(), hash);
    }

    #[test]
    fn test_abbreviated() {
        let hash = ContentHash::hash(b"block");
        let hex = hash.to_hex();
        let short = hash.abbreviated(16, 8);

        assert_eq!(short, format!("{}...{}", &hex[..16], &hex[56..]));
        assert_eq!(hash.abbreviated(40, 40), hex);
        assert_eq!(hash.abbreviated(0, 0), "...");
    }

    #[test]
    fn test_debug_is_short() {
        let hash = ContentHash::hash(b"test");
        let debug = format!("{hash:?}");
        assert!(debug.starts_with("ContentHash("));
        assert!(!debug.contains(&hash.to_hex()));
    }

    #[test]
    fn test_serde() {
        let hash = ContentHash::hash(b"test");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", hash.to_hex()));
        let decoded: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, decoded);
    }
}

//! Audit entry type and marker computation.
//!
//! Every recorded action becomes an [`AuditEntry`]. The entry's marker is a
//! digest over its own fields plus the previous entry's marker, which is what
//! chains the ledger together.

use chainauth_crypto::{ContentHash, IntegrityHasher};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain tag prefixed to every marker input.
const MARKER_DOMAIN: &[u8] = b"chainauth.audit-entry.v1";

/// A single audit ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Position in the ledger, starting at 1.
    pub sequence: u64,
    /// When the action was recorded.
    pub timestamp: DateTime<Utc>,
    /// Acting principal.
    pub actor: String,
    /// What happened.
    pub action: String,
    /// Marker of the previous entry, or [`ContentHash::GENESIS`] for the first.
    pub previous_marker: ContentHash,
    /// Digest over all of the fields above.
    pub marker: ContentHash,
}

impl AuditEntry {
    /// Build an entry and compute its marker.
    pub(crate) fn seal(
        sequence: u64,
        timestamp: DateTime<Utc>,
        actor: String,
        action: String,
        previous_marker: ContentHash,
        hasher: &dyn IntegrityHasher,
    ) -> Self {
        let mut entry = Self {
            sequence,
            timestamp,
            actor,
            action,
            previous_marker,
            marker: ContentHash::GENESIS,
        };
        entry.marker = entry.compute_marker(hasher);
        entry
    }

    /// The exact bytes the marker is digested over.
    ///
    /// Layout: domain tag, sequence (u64 LE), timestamp seconds (i64 LE),
    /// timestamp nanoseconds (u32 LE), length-prefixed actor,
    /// length-prefixed action, previous marker.
    #[must_use]
    pub fn marker_input(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(
            MARKER_DOMAIN
                .len()
                .saturating_add(self.actor.len())
                .saturating_add(self.action.len())
                .saturating_add(68),
        );
        data.extend_from_slice(MARKER_DOMAIN);
        data.extend_from_slice(&self.sequence.to_le_bytes());
        data.extend_from_slice(&self.timestamp.timestamp().to_le_bytes());
        data.extend_from_slice(&self.timestamp.timestamp_subsec_nanos().to_le_bytes());
        push_prefixed(&mut data, self.actor.as_bytes());
        push_prefixed(&mut data, self.action.as_bytes());
        data.extend_from_slice(self.previous_marker.as_bytes());
        data
    }

    /// Recompute the marker from the entry's current fields.
    #[must_use]
    pub fn compute_marker(&self, hasher: &dyn IntegrityHasher) -> ContentHash {
        hasher.digest(&self.marker_input())
    }

    /// Whether the stored marker matches the entry's fields.
    #[must_use]
    pub fn has_valid_marker(&self, hasher: &dyn IntegrityHasher) -> bool {
        self.marker == self.compute_marker(hasher)
    }

    /// Check if this entry directly follows another (chain linking).
    #[must_use]
    pub fn follows(&self, previous: &AuditEntry) -> bool {
        self.previous_marker == previous.marker
    }

    /// Whether this entry claims to be the first in its ledger.
    #[must_use]
    pub fn is_genesis(&self) -> bool {
        self.previous_marker == ContentHash::GENESIS
    }
}

fn push_prefixed(data: &mut Vec<u8>, bytes: &[u8]) {
    let len = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    data.extend_from_slice(&len.to_le_bytes());
    data.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainauth_crypto::{Blake3Hasher, Sha256Hasher};
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 24, 12, 0, 0).unwrap()
    }

    fn genesis_entry() -> AuditEntry {
        AuditEntry::seal(
            1,
            t0(),
            "alice".to_string(),
            "User Login".to_string(),
            ContentHash::GENESIS,
            &Blake3Hasher,
        )
    }

    #[test]
    fn test_entry_creation() {
        let entry = genesis_entry();

        assert!(entry.is_genesis());
        assert!(!entry.marker.is_zero());
        assert!(entry.has_valid_marker(&Blake3Hasher));
    }

    #[test]
    fn test_chain_linking() {
        let entry1 = genesis_entry();
        let entry2 = AuditEntry::seal(
            2,
            t0(),
            "alice".to_string(),
            "Data Access".to_string(),
            entry1.marker,
            &Blake3Hasher,
        );

        assert!(entry2.follows(&entry1));
        assert!(!entry1.follows(&entry2));
        assert!(!entry2.is_genesis());
    }

    #[test]
    fn test_field_tampering_breaks_marker() {
        let mut entry = genesis_entry();
        entry.action = "Permission Update".to_string();
        assert!(!entry.has_valid_marker(&Blake3Hasher));

        let mut entry = genesis_entry();
        entry.timestamp = entry
            .timestamp
            .checked_add_signed(chrono::Duration::nanoseconds(1))
            .unwrap();
        assert!(!entry.has_valid_marker(&Blake3Hasher));

        let mut entry = genesis_entry();
        entry.sequence = 2;
        assert!(!entry.has_valid_marker(&Blake3Hasher));
    }

    #[test]
    fn test_length_prefix_disambiguates_fields() {
        let a = AuditEntry::seal(
            1,
            t0(),
            "ab".to_string(),
            "c".to_string(),
            ContentHash::GENESIS,
            &Blake3Hasher,
        );
        let b = AuditEntry::seal(
            1,
            t0(),
            "a".to_string(),
            "bc".to_string(),
            ContentHash::GENESIS,
            &Blake3Hasher,
        );
        assert_ne!(a.marker, b.marker);
    }

    #[test]
    fn test_marker_depends_on_hasher() {
        let entry = genesis_entry();
        assert!(!entry.has_valid_marker(&Sha256Hasher));
    }

    #[test]
    fn test_serde_preserves_marker() {
        let entry = AuditEntry::seal(
            1,
            t0().checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
                .unwrap(),
            "bob".to_string(),
            "Permission Update".to_string(),
            ContentHash::GENESIS,
            &Blake3Hasher,
        );

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
        assert!(parsed.has_valid_marker(&Blake3Hasher));
    }
}

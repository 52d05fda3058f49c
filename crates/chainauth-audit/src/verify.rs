//! Chain verification.
//!
//! Entries are walked oldest first. For each entry the linkage to its
//! predecessor is checked before its marker is recomputed, and the walk stops
//! at the first failure.

use chainauth_crypto::{ContentHash, IntegrityHasher};
use std::fmt;
use tracing::warn;

use crate::entry::AuditEntry;

/// Kind of integrity violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The entry's stored marker does not match its fields (content altered
    /// or marker replaced).
    MarkerMismatch,
    /// The entry's previous marker does not match its predecessor (entries
    /// removed, inserted or reordered).
    ChainBreak,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkerMismatch => write!(f, "marker mismatch"),
            Self::ChainBreak => write!(f, "chain break"),
        }
    }
}

/// The first integrity violation found in a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityViolation {
    /// 0-based position of the offending entry.
    pub index: usize,
    /// 1-based position, i.e. the sequence number an untampered entry at
    /// this position carries.
    pub sequence: u64,
    /// What went wrong.
    pub kind: ViolationKind,
    /// Marker the check expected.
    pub expected: ContentHash,
    /// Marker actually found.
    pub found: ContentHash,
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at entry #{} (expected {}, found {})",
            self.kind,
            self.sequence,
            self.expected.abbreviated(16, 8),
            self.found.abbreviated(16, 8)
        )
    }
}

/// Result of chain verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainVerification {
    /// Every entry checked out.
    Valid {
        /// Number of entries verified.
        entries_verified: usize,
    },
    /// The chain has been tampered with.
    Invalid(IntegrityViolation),
}

impl ChainVerification {
    /// Whether the chain is intact.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The violation, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&IntegrityViolation> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid(violation) => Some(violation),
        }
    }
}

impl fmt::Display for ChainVerification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid { entries_verified } => {
                write!(f, "valid ({entries_verified} entries)")
            },
            Self::Invalid(violation) => write!(f, "invalid: {violation}"),
        }
    }
}

/// Verify a sequence of entries, oldest first.
///
/// Works on any snapshot, including one read back from an exported trail.
/// An empty sequence is valid.
#[must_use]
pub fn verify_entries(entries: &[AuditEntry], hasher: &dyn IntegrityHasher) -> ChainVerification {
    let mut expected_previous = ContentHash::GENESIS;
    let mut sequence: u64 = 0;

    for (index, entry) in entries.iter().enumerate() {
        sequence = sequence.saturating_add(1);

        if entry.previous_marker != expected_previous {
            let violation = IntegrityViolation {
                index,
                sequence,
                kind: ViolationKind::ChainBreak,
                expected: expected_previous,
                found: entry.previous_marker,
            };
            warn!(%violation, "Audit chain link broken");
            return ChainVerification::Invalid(violation);
        }

        let recomputed = entry.compute_marker(hasher);
        if entry.marker != recomputed {
            let violation = IntegrityViolation {
                index,
                sequence,
                kind: ViolationKind::MarkerMismatch,
                expected: recomputed,
                found: entry.marker,
            };
            warn!(%violation, "Audit entry marker mismatch");
            return ChainVerification::Invalid(violation);
        }

        expected_previous = entry.marker;
    }

    ChainVerification::Valid {
        entries_verified: entries.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainauth_crypto::Blake3Hasher;
    use chrono::{TimeZone, Utc};

    fn chain(actions: &[&str]) -> Vec<AuditEntry> {
        let t0 = Utc.with_ymd_and_hms(2025, 9, 24, 9, 30, 0).unwrap();
        let mut previous = ContentHash::GENESIS;
        let mut entries = Vec::new();
        for (sequence, action) in (1u64..).zip(actions) {
            let entry = AuditEntry::seal(
                sequence,
                t0,
                "alice".to_string(),
                (*action).to_string(),
                previous,
                &Blake3Hasher,
            );
            previous = entry.marker;
            entries.push(entry);
        }
        entries
    }

    #[test]
    fn test_empty_chain_is_valid() {
        assert_eq!(
            verify_entries(&[], &Blake3Hasher),
            ChainVerification::Valid {
                entries_verified: 0
            }
        );
    }

    #[test]
    fn test_intact_chain_is_valid() {
        let entries = chain(&["User Login", "Data Access", "User Logout"]);
        let result = verify_entries(&entries, &Blake3Hasher);
        assert!(result.is_valid());
        assert!(result.violation().is_none());
        assert_eq!(result.to_string(), "valid (3 entries)");
    }

    #[test]
    fn test_altered_content_is_marker_mismatch() {
        let mut entries = chain(&["User Login", "Data Access", "User Logout"]);
        entries[1].actor = "mallory".to_string();

        let violation = verify_entries(&entries, &Blake3Hasher)
            .violation()
            .cloned()
            .unwrap();
        assert_eq!(violation.index, 1);
        assert_eq!(violation.sequence, 2);
        assert_eq!(violation.kind, ViolationKind::MarkerMismatch);
        assert_eq!(violation.found, entries[1].marker);
    }

    #[test]
    fn test_substituted_marker_reported_at_altered_entry() {
        let mut entries = chain(&["User Login", "Data Access", "User Logout"]);
        entries[0].marker = entries[2].marker;

        let violation = verify_entries(&entries, &Blake3Hasher)
            .violation()
            .cloned()
            .unwrap();
        assert_eq!(violation.index, 0);
        assert_eq!(violation.kind, ViolationKind::MarkerMismatch);
    }

    #[test]
    fn test_removed_entry_is_chain_break() {
        let mut entries = chain(&["User Login", "Data Access", "User Logout"]);
        entries.remove(1);

        let violation = verify_entries(&entries, &Blake3Hasher)
            .violation()
            .cloned()
            .unwrap();
        assert_eq!(violation.index, 1);
        assert_eq!(violation.kind, ViolationKind::ChainBreak);
        assert_eq!(violation.expected, entries[0].marker);
    }

    #[test]
    fn test_removed_first_entry_is_chain_break_at_genesis() {
        let mut entries = chain(&["User Login", "Data Access"]);
        entries.remove(0);

        let violation = verify_entries(&entries, &Blake3Hasher)
            .violation()
            .cloned()
            .unwrap();
        assert_eq!(violation.index, 0);
        assert_eq!(violation.kind, ViolationKind::ChainBreak);
        assert_eq!(violation.expected, ContentHash::GENESIS);
    }

    #[test]
    fn test_swapped_entries_is_chain_break() {
        let mut entries = chain(&["User Login", "Data Access", "Permission Update"]);
        entries.swap(1, 2);

        let violation = verify_entries(&entries, &Blake3Hasher)
            .violation()
            .cloned()
            .unwrap();
        assert_eq!(violation.index, 1);
        assert_eq!(violation.kind, ViolationKind::ChainBreak);
    }

    #[test]
    fn test_violation_display() {
        let mut entries = chain(&["User Login"]);
        entries[0].action = "readX".to_string();

        let text = verify_entries(&entries, &Blake3Hasher).to_string();
        assert!(text.starts_with("invalid: marker mismatch at entry #1"));
    }
}

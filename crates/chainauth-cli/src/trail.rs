//! Exported trail files.

use std::path::Path;

use anyhow::Context;
use chainauth_audit::{
    AuditEntry, AuditLedger, ChainVerification, HashAlgorithm, verify_entries,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ledger snapshot written to disk as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TrailFile {
    /// Digest the markers were computed with.
    pub(crate) algorithm: HashAlgorithm,
    /// When the snapshot was taken.
    pub(crate) exported_at: DateTime<Utc>,
    /// Entries, oldest first.
    pub(crate) entries: Vec<AuditEntry>,
}

impl TrailFile {
    /// Snapshot a ledger.
    pub(crate) fn from_ledger(ledger: &AuditLedger) -> Self {
        Self {
            algorithm: ledger.algorithm(),
            exported_at: Utc::now(),
            entries: ledger.entries(),
        }
    }

    /// Write the trail as pretty JSON.
    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write trail to {}", path.display()))
    }

    /// Read a trail written by [`save`](Self::save).
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read trail from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not a valid trail file", path.display()))
    }

    /// Re-verify the chain with the recorded algorithm.
    pub(crate) fn verify(&self) -> ChainVerification {
        verify_entries(&self.entries, self.algorithm.hasher().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainauth_audit::ViolationKind;
    use chainauth_test::{seeded_ledger, seeded_ledger_with, test_dir};

    #[test]
    fn test_export_reverifies() {
        let dir = test_dir();
        let path = dir.path().join("trail.json");
        let ledger = seeded_ledger_with(HashAlgorithm::Sha256, 4);

        TrailFile::from_ledger(&ledger).save(&path).unwrap();
        let loaded = TrailFile::load(&path).unwrap();

        assert_eq!(loaded.algorithm, HashAlgorithm::Sha256);
        assert_eq!(loaded.entries, ledger.entries());
        assert!(loaded.verify().is_valid());
    }

    #[test]
    fn test_tampered_file_fails() {
        let dir = test_dir();
        let path = dir.path().join("trail.json");
        TrailFile::from_ledger(&seeded_ledger(3)).save(&path).unwrap();

        let edited = std::fs::read_to_string(&path)
            .unwrap()
            .replace("action 1", "action X");
        std::fs::write(&path, edited).unwrap();

        let verification = TrailFile::load(&path).unwrap().verify();
        let violation = verification.violation().unwrap();
        assert_eq!(violation.sequence, 2);
        assert_eq!(violation.kind, ViolationKind::MarkerMismatch);
    }

    #[test]
    fn test_wrong_algorithm_fails() {
        let mut trail = TrailFile::from_ledger(&seeded_ledger(2));
        trail.algorithm = HashAlgorithm::Sha256;
        assert!(!trail.verify().is_valid());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = test_dir();
        let path = dir.path().join("trail.json");
        std::fs::write(&path, "not json").unwrap();
        let err = TrailFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("not a valid trail file"));
    }
}

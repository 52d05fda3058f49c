//! Audit ledger - main interface for recording and verifying entries.
//!
//! Provides a high-level API for appending audit entries and verifying the
//! chain they form.

use chainauth_crypto::{ContentHash, HashAlgorithm, IntegrityHasher};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

use crate::entry::AuditEntry;
use crate::error::{AuditResult, ValidationError};
use crate::verify::{ChainVerification, verify_entries};

/// Entries plus the cached tail marker, guarded together.
#[derive(Debug, Default)]
struct LedgerState {
    entries: Vec<AuditEntry>,
    tail: ContentHash,
}

/// Append-only audit ledger.
///
/// Appends are serialized by a write lock held from reading the tail marker
/// through storing the new entry. Reads copy the entries out under a read
/// lock, so a returned snapshot never changes.
pub struct AuditLedger {
    /// Digest used for entry markers.
    hasher: Arc<dyn IntegrityHasher>,
    state: RwLock<LedgerState>,
}

impl AuditLedger {
    /// Create an empty ledger using BLAKE3 markers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_algorithm(HashAlgorithm::Blake3)
    }

    /// Create an empty ledger using the given algorithm.
    #[must_use]
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self::with_hasher(algorithm.hasher())
    }

    /// Create an empty ledger with a custom hasher.
    #[must_use]
    pub fn with_hasher(hasher: Arc<dyn IntegrityHasher>) -> Self {
        Self {
            hasher,
            state: RwLock::new(LedgerState {
                entries: Vec::new(),
                tail: ContentHash::GENESIS,
            }),
        }
    }

    /// Append a new entry.
    ///
    /// A `timestamp` earlier than the current tail entry's is raised to the
    /// tail's timestamp so the ledger stays chronologically ordered.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Validation`](crate::AuditError::Validation) if
    /// `actor` or `action` is empty. The ledger is left unchanged.
    pub fn append(
        &self,
        actor: impl Into<String>,
        action: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> AuditResult<AuditEntry> {
        let actor = actor.into();
        let action = action.into();

        if actor.is_empty() {
            return Err(ValidationError::EmptyActor.into());
        }
        if action.is_empty() {
            return Err(ValidationError::EmptyAction.into());
        }

        let mut state = self.write_state();

        let timestamp = match state.entries.last() {
            Some(last) if timestamp < last.timestamp => {
                warn!(
                    requested = %timestamp,
                    recorded = %last.timestamp,
                    "Audit timestamp precedes ledger tail, clamping"
                );
                last.timestamp
            },
            _ => timestamp,
        };

        let sequence = u64::try_from(state.entries.len())
            .unwrap_or(u64::MAX)
            .saturating_add(1);

        let entry = AuditEntry::seal(
            sequence,
            timestamp,
            actor,
            action,
            state.tail,
            self.hasher.as_ref(),
        );

        debug!(
            sequence = entry.sequence,
            actor = %entry.actor,
            action = %entry.action,
            marker = %entry.marker.abbreviated(16, 8),
            "Appending audit entry"
        );

        state.tail = entry.marker;
        state.entries.push(entry.clone());

        Ok(entry)
    }

    /// Append a new entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append).
    pub fn record(
        &self,
        actor: impl Into<String>,
        action: impl Into<String>,
    ) -> AuditResult<AuditEntry> {
        self.append(actor, action, Utc::now())
    }

    /// Snapshot of all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.read_state().entries.clone()
    }

    /// Snapshot of the entries recorded for one actor, oldest first.
    #[must_use]
    pub fn entries_by(&self, actor: &str) -> Vec<AuditEntry> {
        self.read_state()
            .entries
            .iter()
            .filter(|e| e.actor == actor)
            .cloned()
            .collect()
    }

    /// Get an entry by sequence number.
    #[must_use]
    pub fn get(&self, sequence: u64) -> Option<AuditEntry> {
        let index = usize::try_from(sequence.checked_sub(1)?).ok()?;
        self.read_state().entries.get(index).cloned()
    }

    /// Recompute the chain and report the first violation, if any.
    #[must_use]
    pub fn verify(&self) -> ChainVerification {
        let snapshot = self.entries();
        verify_entries(&snapshot, self.hasher.as_ref())
    }

    /// Count entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_state().entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_state().entries.is_empty()
    }

    /// Marker of the newest entry, or [`ContentHash::GENESIS`] when empty.
    #[must_use]
    pub fn tail_marker(&self) -> ContentHash {
        self.read_state().tail
    }

    /// Algorithm used for markers.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.hasher.algorithm()
    }

    /// The hasher used for markers.
    #[must_use]
    pub fn hasher(&self) -> &dyn IntegrityHasher {
        self.hasher.as_ref()
    }

    // State is only mutated after the new entry is fully built, so a panic
    // while the lock is held cannot leave a half-applied append behind.
    fn read_state(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(|e| {
            warn!("AuditLedger read lock poisoned, recovering");
            e.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(|e| {
            warn!("AuditLedger lock poisoned, recovering");
            e.into_inner()
        })
    }

    /// Overwrite a stored entry in place, simulating tampering.
    #[cfg(test)]
    fn tamper_with(&self, index: usize, f: impl FnOnce(&mut AuditEntry)) {
        let mut state = self.write_state();
        f(&mut state.entries[index]);
    }
}

impl Default for AuditLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuditLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("AuditLedger")
            .field("algorithm", &self.hasher.algorithm())
            .field("entries", &state.entries.len())
            .field("tail", &state.tail)
            .finish()
    }
}

//! Property tests over randomly generated ledgers.
//!
//! - Sequence numbers run 1..=n with no gaps.
//! - The first entry links to genesis and every later entry links to its
//!   predecessor's marker.
//! - Timestamps never go backwards, whatever order callers supply them in.
//! - Changing any sealed field of any entry in a snapshot is caught at that
//!   entry.

#![allow(clippy::unwrap_used)]

use chainauth_audit::{
    AuditEntry, AuditLedger, ContentHash, HashAlgorithm, ViolationKind, verify_entries,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

/// One append: actor, action and a signed offset in seconds from a fixed base.
type Step = (String, String, i64);

#[derive(Debug, Clone, Copy)]
enum Field {
    Actor,
    Action,
    Timestamp,
    Sequence,
    Marker,
    PreviousMarker,
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 24, 9, 30, 0).unwrap()
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(("[a-z]{1,8}", "[A-Za-z ]{1,16}", -3_600i64..3_600), 1..24)
}

fn arb_algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![Just(HashAlgorithm::Blake3), Just(HashAlgorithm::Sha256)]
}

fn arb_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Actor),
        Just(Field::Action),
        Just(Field::Timestamp),
        Just(Field::Sequence),
        Just(Field::Marker),
        Just(Field::PreviousMarker),
    ]
}

fn build(algorithm: HashAlgorithm, steps: &[Step]) -> AuditLedger {
    let ledger = AuditLedger::with_algorithm(algorithm);
    for (actor, action, offset) in steps {
        let at = base_time()
            .checked_add_signed(Duration::seconds(*offset))
            .unwrap();
        ledger.append(actor.as_str(), action.as_str(), at).unwrap();
    }
    ledger
}

fn tamper(entry: &mut AuditEntry, field: Field) {
    match field {
        Field::Actor => entry.actor.push('x'),
        Field::Action => entry.action.push('x'),
        Field::Timestamp => {
            entry.timestamp = entry
                .timestamp
                .checked_add_signed(Duration::seconds(1))
                .unwrap();
        },
        Field::Sequence => entry.sequence = entry.sequence.saturating_add(1),
        Field::Marker => entry.marker = ContentHash::from_bytes([0xAB; 32]),
        Field::PreviousMarker => entry.previous_marker = ContentHash::from_bytes([0xCD; 32]),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn chain_is_numbered_linked_and_ordered(
        algorithm in arb_algorithm(),
        steps in arb_steps(),
    ) {
        let ledger = build(algorithm, &steps);
        let entries = ledger.entries();

        prop_assert_eq!(entries.len(), steps.len());
        prop_assert_eq!(entries[0].previous_marker, ContentHash::GENESIS);
        for (expected, entry) in (1u64..).zip(&entries) {
            prop_assert_eq!(entry.sequence, expected);
        }
        for pair in entries.windows(2) {
            prop_assert_eq!(pair[1].previous_marker, pair[0].marker);
            prop_assert!(pair[1].timestamp >= pair[0].timestamp);
        }
        prop_assert_eq!(ledger.tail_marker(), entries.last().unwrap().marker);
        prop_assert!(ledger.verify().is_valid());
    }

    #[test]
    fn any_field_change_is_caught_at_that_entry(
        algorithm in arb_algorithm(),
        steps in arb_steps(),
        pick in any::<prop::sample::Index>(),
        field in arb_field(),
    ) {
        let ledger = build(algorithm, &steps);
        let mut snapshot = ledger.entries();
        let index = pick.index(snapshot.len());
        tamper(&mut snapshot[index], field);

        let result = verify_entries(&snapshot, ledger.hasher());
        let violation = result.violation().cloned();
        prop_assert!(violation.is_some(), "{:?} change at {} went unnoticed", field, index);
        let violation = violation.unwrap();

        let expected_kind = match field {
            Field::PreviousMarker => ViolationKind::ChainBreak,
            _ => ViolationKind::MarkerMismatch,
        };
        prop_assert_eq!(violation.index, index);
        prop_assert_eq!(violation.kind, expected_kind);

        // The ledger's own history is untouched by edits to a snapshot.
        prop_assert!(ledger.verify().is_valid());
    }
}

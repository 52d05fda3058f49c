//! Test fixtures for common types.

use chainauth_audit::{AuditLedger, HashAlgorithm};
use chainauth_session::{Credentials, Registration};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// A fixed instant, for tests that need reproducible markers.
///
/// # Panics
///
/// Never in practice; the literal date is valid.
#[must_use]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// A ledger holding `count` entries by `"alice"`, one second apart,
/// starting at [`fixed_time`].
///
/// # Panics
///
/// Panics if an append fails.
#[must_use]
pub fn seeded_ledger(count: usize) -> AuditLedger {
    seeded_ledger_with(HashAlgorithm::default(), count)
}

/// Like [`seeded_ledger`] with an explicit digest algorithm.
///
/// # Panics
///
/// Panics if an append fails.
#[must_use]
pub fn seeded_ledger_with(algorithm: HashAlgorithm, count: usize) -> AuditLedger {
    let ledger = AuditLedger::with_algorithm(algorithm);
    let mut at = fixed_time();
    for i in 0..count {
        ledger
            .append("alice", format!("action {i}"), at)
            .expect("seed append");
        at = at
            .checked_add_signed(Duration::seconds(1))
            .expect("timestamp in range");
    }
    ledger
}

/// Valid login credentials for `"alice"`.
#[must_use]
pub fn test_credentials() -> Credentials {
    Credentials::new("alice", "correct horse battery staple")
}

/// Login credentials for a specific user.
#[must_use]
pub fn test_credentials_for(username: impl Into<String>) -> Credentials {
    Credentials::new(username, "correct horse battery staple")
}

/// A valid registration form for `"bob"`.
#[must_use]
pub fn test_registration() -> Registration {
    Registration::new("bob", "tr0ub4dor&3", "tr0ub4dor&3").with_email("bob@example.com")
}

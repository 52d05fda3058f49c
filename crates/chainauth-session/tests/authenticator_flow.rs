//! End-to-end authentication flows against a shared ledger.

use std::sync::Arc;

use chainauth_audit::{AuditLedger, HashAlgorithm, ViolationKind, verify_entries};
use chainauth_session::{AuthError, Authenticator, Credentials, Role, actions};
use chainauth_test::{
    RecordingProvider, RejectingProvider, setup_test_logging, test_credentials,
    test_credentials_for, test_registration,
};

fn trail(ledger: &AuditLedger) -> Vec<(String, String)> {
    ledger
        .entries()
        .into_iter()
        .map(|e| (e.actor, e.action))
        .collect()
}

#[test]
fn test_register_login_logout_trail() {
    setup_test_logging("warn");
    let ledger = Arc::new(AuditLedger::new());
    let provider = Arc::new(RecordingProvider::new());
    let auth = Authenticator::new(Arc::clone(&ledger), provider.clone());

    let session = auth.register(&test_registration()).unwrap();
    assert_eq!(session.user.email.as_deref(), Some("bob@example.com"));
    auth.record_action(&session, "Data Access").unwrap();
    auth.logout(session).unwrap();

    let session = auth.login(&test_credentials()).unwrap();
    auth.logout(session).unwrap();

    assert_eq!(
        trail(&ledger),
        vec![
            ("bob".to_string(), actions::REGISTER.to_string()),
            ("bob".to_string(), "Data Access".to_string()),
            ("bob".to_string(), actions::LOGOUT.to_string()),
            ("alice".to_string(), actions::LOGIN.to_string()),
            ("alice".to_string(), actions::LOGOUT.to_string()),
        ]
    );
    assert_eq!(provider.enrollments(), vec!["bob".to_string()]);
    assert_eq!(provider.logins(), vec!["alice".to_string()]);
    assert!(ledger.verify().is_valid());
}

#[test]
fn test_interleaved_users_share_one_chain() {
    let ledger = Arc::new(AuditLedger::new());
    let provider = Arc::new(RecordingProvider::new());
    let auth = Authenticator::new(Arc::clone(&ledger), provider.clone());

    let carol = auth.login(&test_credentials_for("carol")).unwrap();
    let dave = auth.login(&test_credentials_for("dave")).unwrap();
    auth.record_action(&carol, "Data Access").unwrap();
    auth.logout(dave).unwrap();

    assert_eq!(provider.logins(), vec!["carol".to_string(), "dave".to_string()]);
    assert_eq!(ledger.entries_by("carol").len(), 2);
    assert_eq!(ledger.entries_by("dave").len(), 2);
    assert!(ledger.verify().is_valid());
}

#[test]
fn test_rejected_login_is_recorded_but_no_session() {
    let ledger = Arc::new(AuditLedger::new());
    let auth = Authenticator::new(
        Arc::clone(&ledger),
        Arc::new(RejectingProvider::new("account locked")),
    );

    let err = auth.login(&test_credentials()).unwrap_err();
    assert_eq!(err.to_string(), "authentication rejected: account locked");

    let entries = ledger.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].actor, "alice");
    assert_eq!(entries[0].action, actions::LOGIN_REJECTED);
}

#[test]
fn test_validation_failures_leave_ledger_untouched() {
    let ledger = Arc::new(AuditLedger::new());
    let provider = Arc::new(RecordingProvider::new());
    let auth = Authenticator::new(Arc::clone(&ledger), provider.clone());

    assert!(matches!(
        auth.login(&Credentials::new("", "pw")),
        Err(AuthError::MissingCredentials)
    ));
    assert!(ledger.is_empty());
    assert!(provider.logins().is_empty());
}

#[test]
fn test_summary_then_snapshot_tampering() {
    let ledger = Arc::new(AuditLedger::with_algorithm(HashAlgorithm::Sha256));
    let auth = Authenticator::new(
        Arc::clone(&ledger),
        Arc::new(RecordingProvider::new().with_role(Role::Admin)),
    );

    let session = auth.login(&test_credentials()).unwrap();
    auth.record_action(&session, "Permission Update").unwrap();

    let summary = auth.summary(&session);
    assert_eq!(summary.role, Role::Admin);
    assert_eq!(summary.total_actions, 2);
    assert!(summary.chain_intact);

    let mut snapshot = ledger.entries();
    snapshot[1].actor = "mallory".to_string();
    let violation = verify_entries(&snapshot, ledger.hasher())
        .violation()
        .cloned()
        .unwrap();
    assert_eq!(violation.sequence, 2);
    assert_eq!(violation.kind, ViolationKind::MarkerMismatch);
}

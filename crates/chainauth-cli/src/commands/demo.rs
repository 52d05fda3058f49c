//! Demo command - walk a user through the authentication flow.

use std::path::Path;
use std::sync::Arc;

use chainauth_audit::{AuditLedger, HashAlgorithm};
use chainauth_session::{
    AuthResult, Authenticator, Credentials, PermissiveProvider, Registration, SessionSummary,
};
use tracing::info;

use crate::commands::trail::{print_entries, print_verification};
use crate::config_bridge::DisplayOptions;
use crate::theme::Theme;
use crate::trail::TrailFile;

const DEMO_PASSWORD: &str = "demo-password";

/// Register, log in, act twice, log out. Returns the summary taken just
/// before logout.
pub(crate) fn run_scenario(auth: &Authenticator, user: &str) -> AuthResult<SessionSummary> {
    let registration = Registration::new(user, DEMO_PASSWORD, DEMO_PASSWORD)
        .with_email(format!("{user}@example.com"));
    auth.register(&registration)?;

    let session = auth.login(&Credentials::new(user, DEMO_PASSWORD))?;
    auth.record_action(&session, "Data Access")?;
    auth.record_action(&session, "Permission Update")?;

    let summary = auth.summary(&session);
    auth.logout(session)?;
    Ok(summary)
}

fn print_summary(summary: &SessionSummary) {
    println!("\n{}", Theme::header("Session"));
    println!("  {}", Theme::kv("User", &summary.username));
    if let Some(email) = &summary.email {
        println!("  {}", Theme::kv("Email", email));
    }
    println!("  {}", Theme::kv("Role", &summary.role.to_string()));
    println!(
        "  {}",
        Theme::kv("Last login", &summary.last_login.to_rfc3339())
    );
    println!(
        "  {}",
        Theme::kv("Total actions", &summary.total_actions.to_string())
    );
    let integrity = if summary.chain_intact {
        "intact"
    } else {
        "BROKEN"
    };
    println!("  {}", Theme::kv("Chain", integrity));
}

/// `chainauth demo`.
pub(crate) fn run_demo(
    user: &str,
    export: Option<&Path>,
    algorithm: HashAlgorithm,
    display: DisplayOptions,
) -> anyhow::Result<()> {
    let ledger = Arc::new(AuditLedger::with_algorithm(algorithm));
    let auth = Authenticator::new(Arc::clone(&ledger), Arc::new(PermissiveProvider));

    let summary = run_scenario(&auth, user)?;
    print_summary(&summary);

    print_entries(&ledger.entries(), display);
    print_verification(&ledger.verify());

    if let Some(path) = export {
        TrailFile::from_ledger(&ledger).save(path)?;
        info!(path = %path.display(), entries = ledger.len(), "Exported audit trail");
        println!(
            "{}",
            Theme::success(&format!("Trail exported to {}", path.display()))
        );
    }

    Ok(())
}

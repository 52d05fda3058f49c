//! Trail commands - show and verify exported trails.

use std::path::Path;

use chainauth_audit::{AuditEntry, ChainVerification};
use colored::Colorize;

use crate::config_bridge::DisplayOptions;
use crate::theme::Theme;
use crate::trail::TrailFile;

/// One-line description of an entry: `#3 Data Access by alice`.
pub(crate) fn entry_summary(entry: &AuditEntry) -> String {
    format!("#{} {} by {}", entry.sequence, entry.action, entry.actor)
}

/// Entries in display order.
pub(crate) fn ordered(entries: &[AuditEntry], newest_first: bool) -> Vec<&AuditEntry> {
    if newest_first {
        entries.iter().rev().collect()
    } else {
        entries.iter().collect()
    }
}

/// Print a trail.
pub(crate) fn print_entries(entries: &[AuditEntry], display: DisplayOptions) {
    println!("\n{}", Theme::header("Audit Trail"));
    println!("{}", Theme::separator());

    if entries.is_empty() {
        println!("{}", Theme::info("No audit entries"));
        return;
    }

    for entry in ordered(entries, display.newest_first) {
        println!(
            "{}  {}",
            Theme::timestamp(&entry.timestamp),
            entry_summary(entry)
        );
        println!(
            "    {}",
            Theme::marker(&entry.marker, display.marker_prefix, display.marker_suffix)
        );
    }
    println!();
}

/// Print a verification result.
pub(crate) fn print_verification(verification: &ChainVerification) {
    match verification {
        ChainVerification::Valid { entries_verified } => {
            println!(
                "{}",
                Theme::success(&format!(
                    "Chain verified: {entries_verified} entries, no issues"
                ))
            );
        },
        ChainVerification::Invalid(violation) => {
            println!("{}", Theme::error("Chain integrity violated:"));
            println!("  - {violation}");
            println!(
                "  {}",
                Theme::dimmed(&format!("ledger index {}", violation.index))
            );
        },
    }
}

/// `chainauth show <file>`.
pub(crate) fn show_trail(path: &Path, display: DisplayOptions) -> anyhow::Result<()> {
    let trail = TrailFile::load(path)?;

    println!(
        "{}",
        Theme::kv("Algorithm", &trail.algorithm.to_string())
    );
    println!(
        "{}",
        Theme::kv("Exported", &trail.exported_at.to_rfc3339())
    );
    print_entries(&trail.entries, display);
    Ok(())
}

/// `chainauth verify <file>`. Returns whether the chain is intact.
pub(crate) fn verify_trail(path: &Path) -> anyhow::Result<bool> {
    let trail = TrailFile::load(path)?;

    if trail.entries.is_empty() {
        println!("{}", Theme::warning("Trail contains no entries"));
    }

    let verification = trail.verify();
    println!(
        "{} {}",
        "Algorithm:".dimmed(),
        trail.algorithm.to_string().cyan()
    );
    print_verification(&verification);
    Ok(verification.is_valid())
}

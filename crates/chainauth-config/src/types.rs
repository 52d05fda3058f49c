//! Configuration struct definitions.
//!
//! Defaults here mirror `defaults.toml` so a partially written file still
//! deserializes.

use serde::{Deserialize, Serialize};

/// Top-level chainauth configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Audit ledger settings.
    pub ledger: LedgerSection,
    /// Logging settings.
    pub logging: LoggingSection,
    /// Trail display settings.
    pub display: DisplaySection,
}

/// `[ledger]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSection {
    /// Marker digest: `"blake3"` or `"sha256"`.
    pub hash_algorithm: String,
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self {
            hash_algorithm: "blake3".to_owned(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default level (`trace` .. `error`) or a full filter expression.
    pub level: String,
    /// Output format: `pretty`, `compact` or `json`.
    pub format: String,
    /// Extra per-target directives, e.g. `"chainauth_audit=debug"`.
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "pretty".to_owned(),
            directives: Vec::new(),
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// List the trail newest entry first.
    pub newest_first: bool,
    /// Leading hex characters shown for abbreviated markers.
    pub marker_prefix: usize,
    /// Trailing hex characters shown for abbreviated markers.
    pub marker_suffix: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            newest_first: true,
            marker_prefix: 16,
            marker_suffix: 8,
        }
    }
}

//! Bridge from `chainauth_config::Config` to domain types.

use chainauth_audit::HashAlgorithm;
use chainauth_config::Config;
use chainauth_telemetry::{LogConfig, LogFormat};

/// How trails are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DisplayOptions {
    /// List newest entry first.
    pub(crate) newest_first: bool,
    /// Leading marker hex characters.
    pub(crate) marker_prefix: usize,
    /// Trailing marker hex characters.
    pub(crate) marker_suffix: usize,
}

impl From<&Config> for DisplayOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            newest_first: cfg.display.newest_first,
            marker_prefix: cfg.display.marker_prefix,
            marker_suffix: cfg.display.marker_suffix,
        }
    }
}

/// Logging settings from `[logging]`.
///
/// An unrecognized format falls back to pretty output.
pub(crate) fn to_log_config(cfg: &Config) -> LogConfig {
    let format = cfg.logging.format.parse().unwrap_or(LogFormat::Pretty);
    LogConfig::new(cfg.logging.level.clone())
        .with_format(format)
        .with_directives(cfg.logging.directives.iter().cloned())
}

/// Marker digest from `[ledger]`.
pub(crate) fn hash_algorithm(cfg: &Config) -> anyhow::Result<HashAlgorithm> {
    Ok(cfg.ledger.hash_algorithm.parse()?)
}

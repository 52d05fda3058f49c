//! Post-merge configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Longest marker prefix or suffix that makes sense for a 64-char digest.
const MAX_MARKER_PART: usize = 32;

/// Validate a fully-merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_ledger(config)?;
    validate_logging(config)?;
    validate_display(config)?;
    Ok(())
}

fn validate_ledger(config: &Config) -> ConfigResult<()> {
    // Same spellings the hasher selector accepts.
    let algorithm = config.ledger.hash_algorithm.trim().to_ascii_lowercase();
    if !matches!(algorithm.as_str(), "blake3" | "sha256" | "sha-256") {
        return Err(ConfigError::ValidationError {
            field: "ledger.hash_algorithm".to_owned(),
            message: format!(
                "unsupported algorithm '{}'; expected one of: blake3, sha256",
                config.ledger.hash_algorithm
            ),
        });
    }
    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let l = &config.logging;

    if l.level.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: "level must not be empty".to_owned(),
        });
    }

    if !matches!(l.format.as_str(), "pretty" | "compact" | "json") {
        return Err(ConfigError::ValidationError {
            field: "logging.format".to_owned(),
            message: format!(
                "unsupported format '{}'; expected one of: pretty, compact, json",
                l.format
            ),
        });
    }

    Ok(())
}

fn validate_display(config: &Config) -> ConfigResult<()> {
    let d = &config.display;
    for (field, value) in [
        ("display.marker_prefix", d.marker_prefix),
        ("display.marker_suffix", d.marker_suffix),
    ] {
        if value > MAX_MARKER_PART {
            return Err(ConfigError::ValidationError {
                field: field.to_owned(),
                message: format!("{value} exceeds the maximum of {MAX_MARKER_PART}"),
            });
        }
    }
    Ok(())
}

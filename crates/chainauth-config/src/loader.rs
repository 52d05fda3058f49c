//! Config file discovery and layered loading.
//!
//! 1. Parse `defaults.toml` into the base tree
//! 2. Merge the user config (`~/.chainauth/config.toml` or `$CHAINAUTH_HOME`)
//! 3. Merge the explicit `--config` file
//! 4. Apply env var fallbacks for fields no file set
//! 5. Deserialize and validate

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::env::{apply_env_fallbacks, collect_env_vars};
use crate::error::{ConfigError, ConfigResult};
use crate::merge::{ConfigLayer, FieldSources, deep_merge_tracking, record_leaves};
use crate::show::ResolvedConfig;
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MiB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// Where [`load_with_env`] looks for the user-level config.
#[derive(Debug, Clone)]
pub enum UserConfigLocation {
    /// Search `{home}/.chainauth/config.toml`, then `$CHAINAUTH_HOME`.
    Home(PathBuf),
    /// Use `{dir}/config.toml` and nothing else.
    Dir(PathBuf),
    /// Skip the user layer.
    Skip,
}

/// Load configuration from the process environment.
///
/// # Errors
///
/// Returns a [`ConfigError`] if any config file is malformed, oversized, or
/// the final configuration fails validation.
pub fn load(explicit: Option<&Path>) -> ConfigResult<ResolvedConfig> {
    let home = directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDir)?;
    load_with_env(
        explicit,
        &UserConfigLocation::Home(home),
        &collect_env_vars(),
    )
}

/// Load configuration with an explicit user location and environment.
///
/// # Errors
///
/// Returns a [`ConfigError`] if any config file is malformed, oversized, or
/// the final configuration fails validation.
pub fn load_with_env<S: ::std::hash::BuildHasher>(
    explicit: Option<&Path>,
    user: &UserConfigLocation,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<ResolvedConfig> {
    let mut merged: toml::Value =
        toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
            path: "<embedded defaults>".to_owned(),
            source: e,
        })?;

    let mut field_sources = FieldSources::new();
    let mut loaded_files = Vec::new();
    record_leaves(&merged, "", &ConfigLayer::Defaults, &mut field_sources);

    if let Some((overlay, path)) = find_user_config(user, env_vars)? {
        deep_merge_tracking(
            &mut merged,
            &overlay,
            "",
            &ConfigLayer::User,
            &mut field_sources,
        );
        info!(path = %path.display(), "loaded user config");
        loaded_files.push(path.display().to_string());
    }

    if let Some(path) = explicit {
        let overlay = try_load_file(path)?.ok_or_else(|| ConfigError::ReadError {
            path: path.display().to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })?;
        deep_merge_tracking(
            &mut merged,
            &overlay,
            "",
            &ConfigLayer::Explicit,
            &mut field_sources,
        );
        info!(path = %path.display(), "loaded explicit config");
        loaded_files.push(path.display().to_string());
    }

    let env_count = apply_env_fallbacks(&mut merged, &mut field_sources, env_vars);
    if env_count > 0 {
        debug!(count = env_count, "applied environment variable fallbacks");
    }

    let config: Config =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged config>".to_owned(),
                source: e,
            })?;

    validate::validate(&config)?;

    Ok(ResolvedConfig {
        config,
        field_sources,
        loaded_files,
    })
}

fn find_user_config<S: ::std::hash::BuildHasher>(
    user: &UserConfigLocation,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<Option<(toml::Value, PathBuf)>> {
    match user {
        UserConfigLocation::Skip => Ok(None),
        UserConfigLocation::Dir(dir) => {
            let path = dir.join("config.toml");
            Ok(try_load_file(&path)?.map(|overlay| (overlay, path)))
        },
        UserConfigLocation::Home(home) => {
            let path = home.join(".chainauth").join("config.toml");
            if let Some(overlay) = try_load_file(&path)? {
                return Ok(Some((overlay, path)));
            }
            let Some(raw) = env_vars.get("CHAINAUTH_HOME") else {
                return Ok(None);
            };
            let Some(dir) = validate_chainauth_home(raw, home) else {
                warn!(
                    path = raw,
                    "CHAINAUTH_HOME is not a valid directory owned by current user; ignoring"
                );
                return Ok(None);
            };
            let path = dir.join("config.toml");
            Ok(try_load_file(&path)?.map(|overlay| (overlay, path)))
        },
    }
}

/// Try to load a file, returning `None` if the file doesn't exist.
///
/// Reads once and checks the size afterwards so there is no window between
/// a stat and the read.
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, skipping");
            return Ok(None);
        },
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    let size = u64::try_from(content.len()).unwrap_or(u64::MAX);
    if size > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {size} bytes, exceeding the {MAX_CONFIG_FILE_SIZE} byte limit"
            ),
        });
    }

    let value: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(value))
}

/// Accept a `CHAINAUTH_HOME` only if it is a real directory owned by the
/// same user as `home_dir`. Returns the canonical path.
fn validate_chainauth_home(raw_path: &str, home_dir: &Path) -> Option<PathBuf> {
    let canonical = PathBuf::from(raw_path).canonicalize().ok()?;

    if !canonical.is_dir() {
        return None;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let dir_uid = canonical.metadata().ok()?.uid();
        let home_uid = home_dir.metadata().ok()?.uid();
        if dir_uid != home_uid {
            return None;
        }
    }

    #[cfg(not(unix))]
    let _ = home_dir;

    Some(canonical)
}

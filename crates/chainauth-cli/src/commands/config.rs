//! Config command - show the resolved configuration.

use anyhow::Context;
use chainauth_config::{ResolvedConfig, ShowFormat};

use crate::theme::Theme;

/// `chainauth config show`.
pub(crate) fn show_config(resolved: &ResolvedConfig, format: &str) -> anyhow::Result<()> {
    let show_format = match format {
        "json" => ShowFormat::Json,
        "toml" => ShowFormat::Toml,
        other => anyhow::bail!("unknown format '{other}'; expected toml or json"),
    };

    let output = resolved
        .show(show_format)
        .context("failed to render configuration")?;
    print!("{output}");

    if show_format == ShowFormat::Json && !resolved.loaded_files.is_empty() {
        eprintln!(
            "{}",
            Theme::dimmed(&format!("loaded: {}", resolved.loaded_files.join(", ")))
        );
    }
    Ok(())
}

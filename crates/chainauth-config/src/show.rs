//! Source-annotated display for `config show`.

use std::fmt::Write as _;

use crate::error::ConfigResult;
use crate::merge::FieldSources;
use crate::types::Config;

/// A resolved configuration together with source annotations.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The final merged configuration.
    pub config: Config,
    /// Dotted field path to the layer that set it.
    pub field_sources: FieldSources,
    /// Config file paths that were loaded, in precedence order.
    pub loaded_files: Vec<String>,
}

/// Output format for `config show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    /// TOML with inline comments showing source.
    #[default]
    Toml,
    /// JSON, for programmatic consumption.
    Json,
}

impl ResolvedConfig {
    /// Render the resolved config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlRenderError`] or
    /// [`ConfigError::JsonRenderError`] if serialization fails.
    ///
    /// [`ConfigError::TomlRenderError`]: crate::ConfigError::TomlRenderError
    /// [`ConfigError::JsonRenderError`]: crate::ConfigError::JsonRenderError
    pub fn show(&self, format: ShowFormat) -> ConfigResult<String> {
        match format {
            ShowFormat::Toml => self.show_toml(),
            ShowFormat::Json => Ok(serde_json::to_string_pretty(&self.config)?),
        }
    }

    fn show_toml(&self) -> ConfigResult<String> {
        let toml_str = toml::to_string_pretty(&self.config)?;

        let mut output = String::new();
        output.push_str("# Resolved chainauth configuration\n");

        if !self.loaded_files.is_empty() {
            output.push_str("#\n# Loaded files (in precedence order):\n");
            for (i, path) in self.loaded_files.iter().enumerate() {
                let _ = writeln!(output, "#   {}. {path}", i.saturating_add(1));
            }
        }
        output.push('\n');

        let mut section = String::new();
        for line in toml_str.lines() {
            let trimmed = line.trim();
            if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                name.clone_into(&mut section);
            }
            let _ = match self.annotate_line(trimmed, &section) {
                Some(layer) => writeln!(output, "{line}  # [{layer}]"),
                None => writeln!(output, "{line}"),
            };
        }

        Ok(output)
    }

    fn annotate_line(&self, trimmed: &str, section: &str) -> Option<String> {
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
            return None;
        }
        let key = trimmed.split('=').next()?.trim();
        let path = if section.is_empty() {
            key.to_owned()
        } else {
            format!("{section}.{key}")
        };
        self.field_sources.get(&path).map(ToString::to_string)
    }
}

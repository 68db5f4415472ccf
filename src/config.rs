//! Configuration file support for family-hierarchy.
//!
//! Provides YAML-based configuration through `family-hierarchy.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use family_hierarchy::application::dto::OutputFormat;
use family_hierarchy::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "family-hierarchy.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub up_levels: Option<i64>,
    pub down_levels: Option<i64>,
    pub user: Option<String>,
    pub store_dir: Option<String>,
    pub persist_uploads: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already validated on load.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes as null, not as an empty mapping.
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format: {}", e);
        }
    }

    for (field, value) in [
        ("up_levels", config.up_levels),
        ("down_levels", config.down_levels),
    ] {
        if let Some(levels) = value {
            if levels < 0 {
                bail!(
                    "Invalid config: {} must be a non-negative number (found {}).",
                    field,
                    levels
                );
            }
        }
    }

    if let Some(store_dir) = config.store_dir.as_deref() {
        if store_dir.trim().is_empty() {
            bail!(
                "Invalid config: store_dir must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default location, or set persist_uploads: false."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

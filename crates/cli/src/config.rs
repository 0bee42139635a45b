// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from `pest-control.toml`.
//!
//! ```toml
//! [output]
//! format = "json"   # "text" (default) or "json"
//! positions = true  # list where each bug was found
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE: &str = "pest-control.toml";

/// Top-level keys and the keys each table accepts.
const KNOWN_KEYS: &[(&str, &[&str])] = &[("output", &["format", "positions"])];

/// Parsed configuration. Every field has a default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// Report settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format.
    pub format: OutputFormat,

    /// List the position of every bug in text output.
    pub positions: bool,
}

/// Load config from `path`, warning about keys that are not recognized.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    let config = parse_with_warnings(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config text. `path` is only used in messages.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let invalid = |message: String| Error::Config { path: path.to_path_buf(), message };

    let table: toml::Table = toml::from_str(content).map_err(|e| invalid(e.message().to_string()))?;
    for key in unknown_keys(&table) {
        tracing::warn!("{}: unknown config key `{}`", path.display(), key);
    }

    toml::Value::Table(table).try_into().map_err(|e: toml::de::Error| invalid(e.message().to_string()))
}

/// Dotted names of keys outside [`KNOWN_KEYS`].
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        match KNOWN_KEYS.iter().find(|(name, _)| *name == key.as_str()) {
            None => unknown.push(key.clone()),
            Some((_, fields)) => {
                if let toml::Value::Table(inner) = value {
                    unknown.extend(
                        inner
                            .keys()
                            .filter(|k| !fields.contains(&k.as_str()))
                            .map(|k| format!("{key}.{k}")),
                    );
                }
            }
        }
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

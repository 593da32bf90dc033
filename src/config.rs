//! Configuration module for Stamp
//!
//! Precedence:
//! 1. CLI flags (highest priority)
//! 2. Project config (`stamp.toml` at the source root)
//! 3. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StampError, StampResult};

/// Name of the optional per-project configuration file
pub const CONFIG_FILE: &str = "stamp.toml";

/// Stamp run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Manifest file path, resolved relative to the output root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Merge with the previously persisted manifest instead of replacing it
    #[serde(default)]
    pub merge: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            merge: false,
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("manifest.json")
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file, collecting non-fatal warnings
    /// for unknown keys.
    pub fn load(path: &Path) -> StampResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_keys: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |key| {
            unknown_keys.push(key.to_string());
        })
        .map_err(|e| StampError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_keys
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load `stamp.toml` from the source root, or fall back to defaults.
    pub fn load_or_default(source_root: &Path) -> StampResult<(Self, Vec<ConfigWarning>)> {
        let path = source_root.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok((Self::default(), Vec::new()))
        }
    }
}

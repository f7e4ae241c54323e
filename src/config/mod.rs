//! Configuration Management Module
//!
//! This module handles loading and managing configuration for node key generation.
//! Configuration controls how the private key is encoded and where the
//! `node_key.json` envelope is written.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::crypto::KeyEncoding;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/nodekey.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "NODEKEY_CONFIG_PATH";

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Node key generation settings
    #[serde(default)]
    pub node_key: NodeKeyConfig,
}

/// Settings for generating and exporting a node key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeKeyConfig {
    /// Layout of the exported private key (`seed` or `expanded`)
    #[serde(default)]
    pub encoding: KeyEncoding,
    /// Where to write `node_key.json` (optional, stdout only when unset)
    #[serde(default)]
    pub output_path: Option<String>,
}

// ============================================================================
// CONFIGURATION LOADING AND MANAGEMENT
// ============================================================================

impl Config {
    /// Loads configuration from the TOML file.
    ///
    /// This function:
    /// 1. If `NODEKEY_CONFIG_PATH` is set, loads that file; a missing file is an error
    /// 2. Otherwise loads `config/nodekey.toml` when it exists
    /// 3. Otherwise falls back to the default configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - Loaded (or default) configuration
    /// - `Err(anyhow::Error)` - The file could not be read, parsed or validated
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::load_from(&config_path);
        }

        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load_from(DEFAULT_CONFIG_PATH)
        } else {
            info!(
                "No configuration file at '{}', using defaults",
                DEFAULT_CONFIG_PATH
            );
            Ok(Self::default())
        }
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read configuration file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse configuration file '{}': {}", path.display(), e)
        })?;
        config.validate()?;
        info!("Configuration loaded from '{}'", path.display());
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// `output_path`, when set, must be a non-empty path to a `.json` file.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(output_path) = &self.node_key.output_path {
            if output_path.trim().is_empty() {
                return Err(anyhow::anyhow!("node_key.output_path must not be empty"));
            }
            if !output_path.ends_with(".json") {
                return Err(anyhow::anyhow!(
                    "node_key.output_path '{}' must point to a .json file",
                    output_path
                ));
            }
        }
        Ok(())
    }
}

//! Parsing and validation for bumpver.toml configuration files

use crate::error::ConfigError;
use crate::types::PackageName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the project root
pub const CONFIG_FILE: &str = "bumpver.toml";

/// Main configuration struct for bumpver.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File locations and lockfile target
    #[serde(default)]
    pub bumpver: BumpverMeta,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `bumpver.toml` from `root`, falling back to defaults if absent
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::load(&path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bumpver.manifest.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bumpver.manifest".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        if self.bumpver.lockfile.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bumpver.lockfile".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        if self.bumpver.manifest == self.bumpver.lockfile {
            return Err(ConfigError::InvalidValue {
                field: "bumpver.lockfile".to_string(),
                message: format!(
                    "must differ from the manifest ({})",
                    self.bumpver.manifest.display()
                ),
            });
        }

        Ok(())
    }
}

/// The `[bumpver]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BumpverMeta {
    /// Manifest path, relative to the project root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Lockfile path, relative to the project root
    #[serde(default = "default_lockfile")]
    pub lockfile: PathBuf,

    /// Lockfile entry to keep in sync (defaults to the manifest's name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageName>,
}

impl Default for BumpverMeta {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            lockfile: default_lockfile(),
            package: None,
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

fn default_lockfile() -> PathBuf {
    PathBuf::from("Cargo.lock")
}

//! Entry configuration loaded from TOML.
//!
//! ```toml
//! default_game = "Trap"
//! default_gauge = "20"
//! policy = "lock_after_first_shot"
//! ```
//!
//! Every key is optional.

use crate::core::{GameType, GaugeType};
use crate::policy::ConfigPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Starting configuration for a [`RoundEntry`](crate::RoundEntry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntryConfig {
    /// Game selected when an entry is created
    pub default_game: GameType,
    /// Gauge selected when an entry is created
    pub default_gauge: GaugeType,
    /// Mid-round configuration change rule
    pub policy: ConfigPolicy,
}

impl EntryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "config.loaded");
        Ok(config)
    }
}

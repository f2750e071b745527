//! Configuration schema for codecache
//!
//! Global configuration lives at `~/.config/codecache/config.toml`; a
//! project may override any key in `.codecache.toml`.

use crate::cache::CachePaths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache file locations
    pub paths: PathsConfig,
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Append cache events to the event log
    pub audit_log: bool,

    /// Event log location (defaults to the state directory)
    pub audit_log_path: Option<PathBuf>,
}

/// Cache file locations, relative paths resolve against the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding contract binaries
    pub storage_root: PathBuf,

    /// Cache store JSON file
    pub cache_file: PathBuf,

    /// Chain epoch artifact written by the test harness
    pub epoch_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("contracts"),
            cache_file: PathBuf::from("configs/contracts.json"),
            epoch_file: PathBuf::from("configs/logs.json"),
        }
    }
}

impl PathsConfig {
    /// Resolve into concrete cache paths under a project root
    pub fn resolve(&self, root: &Path) -> CachePaths {
        CachePaths {
            storage_root: root.join(&self.storage_root),
            cache_file: root.join(&self.cache_file),
            epoch_file: root.join(&self.epoch_file),
        }
    }
}

//! On-disk cache store
//!
//! The store is a single JSON object. Only `start_time` and `file_cache` are
//! interpreted; any other top-level keys are carried through every write.

use super::marker::{deserialize_marker, Epoch, UNINITIALIZED};
use crate::error::{CodeCacheError, CodeCacheResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Code id returned by the chain for a stored contract binary
pub type DeploymentId = u64;

/// Top-level keys owned by the store itself
const FIELD_KEYS: [&str; 2] = ["start_time", "file_cache"];

/// Persisted cache contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStore {
    /// Epoch of the chain session the entries were recorded under
    #[serde(default, deserialize_with = "deserialize_marker")]
    pub start_time: Epoch,

    /// Content key to code id
    #[serde(default)]
    pub file_cache: BTreeMap<String, DeploymentId>,

    /// Unrecognized top-level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(UNINITIALIZED)
    }
}

impl CacheStore {
    /// Create an empty store for an epoch
    pub fn new(start_time: Epoch) -> Self {
        Self {
            start_time,
            file_cache: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Look up the code id for a content key
    pub fn lookup(&self, key: &str) -> Option<DeploymentId> {
        self.file_cache.get(key).copied()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.file_cache.len()
    }

    /// Whether no entries are cached
    pub fn is_empty(&self) -> bool {
        self.file_cache.is_empty()
    }

    /// Load a store from disk
    pub fn load(path: &Path) -> CodeCacheResult<Self> {
        if !path.exists() {
            return Err(CodeCacheError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CodeCacheError::io(format!("reading cache store {}", path.display()), e)
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CodeCacheError::invalid_format(path, e.to_string()))
    }

    /// The store with any `extra` entries that would shadow a field removed
    fn writable(&self) -> Cow<'_, Self> {
        if !FIELD_KEYS.iter().any(|k| self.extra.contains_key(*k)) {
            return Cow::Borrowed(self);
        }

        let mut store = self.clone();
        for key in FIELD_KEYS {
            store.extra.remove(key);
        }
        Cow::Owned(store)
    }

    /// Write the whole store to disk, replacing any previous content
    pub fn save(&self, path: &Path) -> CodeCacheResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CodeCacheError::io(format!("creating directory {}", parent.display()), e)
            })?;
        }

        let mut content = serde_json::to_string_pretty(&self.writable())?;
        content.push('\n');

        fs::write(path, content).map_err(|e| {
            CodeCacheError::io(format!("writing cache store {}", path.display()), e)
        })
    }
}

//! Content cache service
//!
//! `ContentCache` owns no state beyond the paths it was built with. Every
//! operation touching the store is a full read followed by a full write with
//! no locking: one cache-writing process per chain session is assumed, and
//! concurrent writers race with the last write winning.

use super::fingerprint::fingerprint_file;
use super::marker::{read_chain_epoch, read_marker_field, Epoch, UNINITIALIZED};
use super::store::{CacheStore, DeploymentId};
use crate::audit::AuditLog;
use crate::error::CodeCacheResult;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locations the cache reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    /// Directory contract files are resolved against
    pub storage_root: PathBuf,
    /// JSON cache store
    pub cache_file: PathBuf,
    /// Chain epoch artifact written by the test harness
    pub epoch_file: PathBuf,
}

impl CachePaths {
    /// Default layout under a project root
    pub fn under(root: &Path) -> Self {
        Self {
            storage_root: root.join("contracts"),
            cache_file: root.join("configs").join("contracts.json"),
            epoch_file: root.join("configs").join("logs.json"),
        }
    }
}

/// Outcome of [`ContentCache::get_or_deploy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Code id came from the store
    Cached(DeploymentId),
    /// Contract was deployed and the new code id recorded
    Deployed(DeploymentId),
}

impl Resolution {
    /// The code id regardless of where it came from
    pub fn code_id(&self) -> DeploymentId {
        match self {
            Self::Cached(id) | Self::Deployed(id) => *id,
        }
    }
}

/// Whether a stored epoch is still valid for the current chain session
pub fn is_current(stored: Epoch, current: Epoch) -> bool {
    stored != UNINITIALIZED && stored == current
}

/// Code id cache keyed by chain id and contract content
#[derive(Debug, Clone)]
pub struct ContentCache {
    paths: CachePaths,
    events: AuditLog,
}

impl ContentCache {
    /// Create a cache over the given paths
    pub fn new(paths: CachePaths) -> Self {
        Self {
            paths,
            events: AuditLog::disabled(),
        }
    }

    /// Attach an event log
    pub fn with_event_log(mut self, events: AuditLog) -> Self {
        self.events = events;
        self
    }

    /// Paths this cache operates on
    pub fn paths(&self) -> &CachePaths {
        &self.paths
    }

    /// Create an empty store if none exists
    ///
    /// Never touches an existing store. Returns whether a store was created.
    pub fn initialize(&self) -> CodeCacheResult<bool> {
        let cache_file = &self.paths.cache_file;
        if cache_file.exists() {
            debug!("Cache store present at {}", cache_file.display());
            return Ok(false);
        }

        CacheStore::default().save(cache_file)?;
        info!("Created cache store at {}", cache_file.display());
        self.events.log(
            "cache.initialized",
            &json!({ "cache_file": cache_file.display().to_string() }),
        );
        Ok(true)
    }

    /// Read the current chain session epoch
    pub fn read_chain_epoch(&self) -> CodeCacheResult<Epoch> {
        read_chain_epoch(&self.paths.epoch_file)
    }

    /// Epoch the store was last reset to, `UNINITIALIZED` if there is no store
    ///
    /// Reads only `start_time`, so a store whose `file_cache` is malformed
    /// still reports its epoch.
    pub fn stored_epoch(&self) -> CodeCacheResult<Epoch> {
        let cache_file = &self.paths.cache_file;
        if cache_file.exists() {
            read_marker_field(cache_file, UNINITIALIZED)
        } else {
            Ok(UNINITIALIZED)
        }
    }

    /// Bring the store in line with the current chain epoch
    ///
    /// If the stored epoch is uninitialized or differs from `current`,
    /// `candidate` is written out with its `start_time` set to `current` and
    /// an empty `file_cache`. Otherwise nothing is written. Either way the
    /// returned store is freshly read back from disk.
    pub fn reconcile(
        &self,
        mut candidate: CacheStore,
        current: Epoch,
    ) -> CodeCacheResult<CacheStore> {
        let cache_file = &self.paths.cache_file;
        let stored = self.stored_epoch()?;

        if is_current(stored, current) {
            debug!("Cache store is current for epoch {}", current);
        } else {
            candidate.start_time = current;
            candidate.file_cache.clear();
            candidate.save(cache_file)?;

            info!(
                "Chain epoch changed ({} -> {}), cleared {}",
                stored,
                current,
                cache_file.display()
            );
            self.events.log(
                "cache.reset",
                &json!({
                    "previous": stored,
                    "current": current,
                    "cache_file": cache_file.display().to_string(),
                }),
            );
        }

        CacheStore::load(cache_file)
    }

    /// Store a code id under a content key and persist the whole store
    pub fn record(
        &self,
        store: &mut CacheStore,
        key: &str,
        code_id: DeploymentId,
    ) -> CodeCacheResult<DeploymentId> {
        store.file_cache.insert(key.to_string(), code_id);
        store.save(&self.paths.cache_file)?;

        info!("Cached code id {} for {}", code_id, key);
        self.events
            .log("cache.recorded", &json!({ "key": key, "code_id": code_id }));
        Ok(code_id)
    }

    /// Content key for a contract file relative to the storage root
    pub fn fingerprint(
        &self,
        rel_path: impl AsRef<Path>,
        chain_id: &str,
    ) -> CodeCacheResult<String> {
        fingerprint_file(&self.paths.storage_root.join(rel_path), chain_id)
    }

    /// Read the store as it is on disk, without reconciling
    pub fn load(&self) -> CodeCacheResult<CacheStore> {
        CacheStore::load(&self.paths.cache_file)
    }

    /// Resolve a contract's code id, deploying only on a cache miss
    ///
    /// A failing `deploy` leaves the store untouched.
    pub fn get_or_deploy<F>(
        &self,
        rel_path: impl AsRef<Path>,
        chain_id: &str,
        deploy: F,
    ) -> CodeCacheResult<Resolution>
    where
        F: FnOnce() -> CodeCacheResult<DeploymentId>,
    {
        let key = self.fingerprint(rel_path, chain_id)?;
        let epoch = self.read_chain_epoch()?;
        let mut store = self.reconcile(CacheStore::default(), epoch)?;

        if let Some(code_id) = store.lookup(&key) {
            debug!("Cache hit for {}: code id {}", key, code_id);
            return Ok(Resolution::Cached(code_id));
        }

        debug!("Cache miss for {}, deploying", key);
        let code_id = deploy()?;
        self.record(&mut store, &key, code_id)?;
        Ok(Resolution::Deployed(code_id))
    }
}

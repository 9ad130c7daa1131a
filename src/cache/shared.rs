//! Shared Secret Cache
//!
//! The process-wide cache component. Synchronisation and the enabled/disabled
//! mode both live here, so callers use the same two calls either way.

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;

// == Cache Mode ==
#[derive(Debug)]
enum CacheMode {
    Enabled(RwLock<CacheStore>),
    /// Every lookup misses, every store is dropped
    Disabled,
}

// == Secret Cache ==
/// Thread-safe, optionally disabled cache of secret values.
///
/// Construct once at startup and share through an `Arc`.
#[derive(Debug)]
pub struct SecretCache {
    mode: CacheMode,
    config: CacheConfig,
}

impl SecretCache {
    // == Constructor ==
    /// Builds the cache described by `config`.
    pub fn new(config: CacheConfig) -> Self {
        let mode = if config.enabled {
            CacheMode::Enabled(RwLock::new(CacheStore::new(
                config.capacity,
                config.ttl_seconds,
            )))
        } else {
            CacheMode::Disabled
        };

        Self { mode, config }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.mode, CacheMode::Enabled(_))
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Get ==
    /// Returns the cached value for `secret_id` if present and not expired.
    ///
    /// Absence is a normal result, never an error.
    pub async fn get(&self, secret_id: &str) -> Option<String> {
        match &self.mode {
            // Write lock: a hit updates recency and counters
            CacheMode::Enabled(store) => store.write().await.get(secret_id),
            CacheMode::Disabled => {
                debug!("Cache not enabled, skipping get for '{}'", secret_id);
                None
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites the value for `secret_id` with a fresh TTL.
    pub async fn set(&self, secret_id: &str, value: String) {
        match &self.mode {
            CacheMode::Enabled(store) => store.write().await.set(secret_id.to_string(), value),
            CacheMode::Disabled => {
                debug!("Cache not enabled, skipping set for '{}'", secret_id);
            }
        }
    }

    // == Contains ==
    /// Reports whether a live entry exists without counting as a use.
    pub async fn contains(&self, secret_id: &str) -> bool {
        match &self.mode {
            CacheMode::Enabled(store) => store.read().await.contains(secret_id),
            CacheMode::Disabled => false,
        }
    }

    pub async fn len(&self) -> usize {
        match &self.mode {
            CacheMode::Enabled(store) => store.read().await.len(),
            CacheMode::Disabled => 0,
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Stats ==
    /// Current counters; all zero when disabled.
    pub async fn stats(&self) -> CacheStats {
        match &self.mode {
            CacheMode::Enabled(store) => store.read().await.stats(),
            CacheMode::Disabled => CacheStats::new(),
        }
    }

    // == Cleanup Expired ==
    /// Drops expired entries, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        match &self.mode {
            CacheMode::Enabled(store) => store.write().await.cleanup_expired(),
            CacheMode::Disabled => 0,
        }
    }
}

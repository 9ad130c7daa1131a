//! Cache Store Module
//!
//! Unsynchronised cache engine combining HashMap storage with LRU tracking and
//! TTL expiration. Shared access goes through [`SecretCache`](super::SecretCache).

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
/// Secret id to value storage bounded by count and age.
#[derive(Debug)]
pub struct CacheStore {
    /// Secret id to entry
    entries: HashMap<String, CacheEntry>,
    /// Recency order used for eviction
    lru: LruTracker,
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
    /// Lifetime in seconds given to every stored entry
    ttl_seconds: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; `0` stores nothing
    /// * `ttl_seconds` - Lifetime of each entry; `0` makes every entry expire at once
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            ttl_seconds,
        }
    }

    // == Set ==
    /// Stores a value for `key`, resetting its expiry to `now + ttl`.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a full
    /// cache evicts exactly one entry, the least recently used.
    pub fn set(&mut self, key: String, value: String) {
        if self.capacity == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.lru.touch(&key);
        self.entries
            .insert(key, CacheEntry::new(value, self.ttl_seconds));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// A hit refreshes the key's recency. An expired entry is dropped on the
    /// spot and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired(),
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Reports whether a live entry exists for `key` without touching recency
    /// or statistics.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

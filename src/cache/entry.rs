//! Cache Entry Module
//!
//! Defines a cached secret value together with its expiry instant.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// Lifetime used when `now + ttl` cannot be represented.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A secret value held by the cache until its TTL elapses.
///
/// Expiry is measured on the monotonic clock, so wall-clock adjustments never
/// extend or shorten an entry's life.
#[derive(Clone)]
pub struct CacheEntry {
    /// The secret value, never logged
    pub value: String,
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl_seconds` from now.
    ///
    /// A TTL of zero produces an entry that is already expired.
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(ttl_seconds))
            .unwrap_or(now + FAR_FUTURE);

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the clock reaches `expires_at`, so a value is
    /// never served at or past its expiry instant.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

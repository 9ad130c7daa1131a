//! Cache Module
//!
//! In-memory secret cache with TTL expiration, LRU eviction and an explicit
//! disabled mode.

mod entry;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use shared::SecretCache;
pub use stats::CacheStats;
pub use store::CacheStore;

//! Secrets Sidecar - a local cache in front of AWS Secrets Manager
//!
//! Serves `GET /secretsmanager/get?secretId=...` from an in-memory cache with
//! TTL expiration and LRU eviction, going upstream only on a miss.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::{CacheConfig, Config};
pub use error::{FetchError, UpstreamError};
pub use fetch::SecretFetcher;
pub use tasks::spawn_cleanup_task;

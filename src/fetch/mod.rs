//! Fetch Module
//!
//! Cache-backed secret resolution.

mod coordinator;

pub use coordinator::SecretFetcher;

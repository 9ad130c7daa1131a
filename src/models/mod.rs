//! Request and Response models for the sidecar HTTP API
//!
//! DTOs used for deserializing query strings and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SecretQuery;
pub use responses::{ErrorResponse, HealthResponse, SecretResponse, StatsResponse};

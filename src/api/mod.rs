//! API Module
//!
//! HTTP handlers and routing for the sidecar.
//!
//! # Endpoints
//! - `GET /secretsmanager/get?secretId=<id>` - Resolve a secret value
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

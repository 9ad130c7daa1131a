//! API Handlers
//!
//! HTTP request handlers for each sidecar endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::warn;

use crate::cache::SecretCache;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::fetch::SecretFetcher;
use crate::models::{HealthResponse, SecretQuery, SecretResponse, StatsResponse};
use crate::upstream::SecretStoreClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: SecretFetcher,
}

impl AppState {
    pub fn new(fetcher: SecretFetcher) -> Self {
        Self { fetcher }
    }

    /// Builds the cache from configuration and pairs it with `client`.
    pub fn from_config(config: &Config, client: Arc<dyn SecretStoreClient>) -> Self {
        let cache = Arc::new(SecretCache::new(config.cache_config()));
        Self::new(SecretFetcher::new(cache, client))
    }

    pub fn cache(&self) -> &Arc<SecretCache> {
        self.fetcher.cache()
    }
}

/// Handler for GET /secretsmanager/get
///
/// Resolves `secretId` through the cache and returns `{"SecretString": ...}`.
/// A query string that cannot be parsed, such as a repeated `secretId`, is
/// answered with the same JSON 400 as a missing id.
pub async fn get_secret_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<SecretQuery>, QueryRejection>,
) -> Result<Json<SecretResponse>> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected query string: {}", rejection.body_text());
        FetchError::InvalidRequest("Malformed query string".to_string())
    })?;

    if let Some(error_msg) = query.validate() {
        return Err(FetchError::InvalidRequest(error_msg));
    }

    let value = state.fetcher.resolve(query.secret_id()).await?;
    Ok(Json(SecretResponse::new(value)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache();
    let stats = cache.stats().await;

    Json(StatsResponse::new(cache.config(), &stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

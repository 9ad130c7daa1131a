//! Secret Fetcher
//!
//! The single path from a secret id to its value: answer from the cache when
//! possible, otherwise ask the upstream store once and remember the answer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::SecretCache;
use crate::error::{FetchError, Result};
use crate::upstream::SecretStoreClient;

/// Resolves secret ids against the shared cache and upstream client.
///
/// Cheap to clone; clones share the cache and client.
#[derive(Clone)]
pub struct SecretFetcher {
    cache: Arc<SecretCache>,
    client: Arc<dyn SecretStoreClient>,
}

impl SecretFetcher {
    pub fn new(cache: Arc<SecretCache>, client: Arc<dyn SecretStoreClient>) -> Self {
        Self { cache, client }
    }

    pub fn cache(&self) -> &Arc<SecretCache> {
        &self.cache
    }

    // == Resolve ==
    /// Returns the current value of `secret_id`.
    ///
    /// A cache hit makes no upstream call, accepting staleness up to the TTL.
    /// A miss makes exactly one upstream call and caches a usable answer.
    /// Failures are never cached and never retried here, so the next call
    /// goes upstream again.
    ///
    /// Concurrent misses for the same id each call upstream; the last
    /// successful one to finish decides the cached value.
    pub async fn resolve(&self, secret_id: &str) -> Result<String> {
        if secret_id.is_empty() {
            return Err(FetchError::InvalidRequest(
                "secretId must be a non-empty string".to_string(),
            ));
        }

        info!("Fetching secret '{}'", secret_id);

        if let Some(value) = self.cache.get(secret_id).await {
            debug!("Returning cached secret for '{}'", secret_id);
            return Ok(value);
        }

        debug!("Cache miss for secret '{}'", secret_id);

        let output = self
            .client
            .get_secret_value(secret_id)
            .await
            .map_err(|source| {
                warn!("Upstream lookup failed for secret '{}': {}", secret_id, source);
                FetchError::Upstream {
                    secret_id: secret_id.to_string(),
                    source,
                }
            })?;

        let value = output.into_usable().ok_or_else(|| {
            warn!("Upstream returned no secret string for '{}'", secret_id);
            FetchError::MalformedUpstreamResponse(secret_id.to_string())
        })?;

        self.cache.set(secret_id, value.clone()).await;
        Ok(value)
    }
}

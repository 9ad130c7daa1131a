//! Response DTOs for the sidecar HTTP API

use std::fmt;

use serde::Serialize;

use crate::cache::CacheStats;
use crate::config::CacheConfig;

/// Body of a successful secret lookup, shaped like Secrets Manager's
/// `GetSecretValue` output.
#[derive(Clone, Serialize)]
pub struct SecretResponse {
    #[serde(rename = "SecretString")]
    pub secret_string: String,
}

impl SecretResponse {
    pub fn new(secret_string: impl Into<String>) -> Self {
        Self {
            secret_string: secret_string.into(),
        }
    }
}

impl fmt::Debug for SecretResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretResponse")
            .field("secret_string", &"<redacted>")
            .finish()
    }
}

/// Response body for `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Whether caching is active
    pub enabled: bool,
    /// Configured maximum entries
    pub capacity: usize,
    /// Configured entry lifetime in seconds
    pub ttl_seconds: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Entries currently resident
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(config: &CacheConfig, stats: &CacheStats) -> Self {
        Self {
            enabled: config.enabled,
            capacity: config.capacity,
            ttl_seconds: config.ttl_seconds,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in RFC 3339 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secret_response_shape() {
        let resp = SecretResponse::new("s-42");
        assert_eq!(serde_json::to_value(&resp).unwrap(), json!({"SecretString": "s-42"}));
    }

    #[test]
    fn test_secret_response_debug_redacts() {
        let rendered = format!("{:?}", SecretResponse::new("s-42"));
        assert!(!rendered.contains("s-42"));
    }

    #[test]
    fn test_stats_response() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.set_total_entries(1);

        let resp = StatsResponse::new(&CacheConfig::default(), &stats);

        assert!(resp.enabled);
        assert_eq!(resp.capacity, 1000);
        assert_eq!(resp.ttl_seconds, 300);
        assert_eq!(resp.total_entries, 1);
        assert!((resp.hit_rate - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_value(ErrorResponse::new("Failed to fetch secret")).unwrap();
        assert_eq!(json, json!({"error": "Failed to fetch secret"}));
    }
}

//! Configuration Module
//!
//! Loads sidecar settings from environment variables and hands the core only
//! the resolved values it needs.

use std::env;

use tracing::warn;

pub const DEFAULT_HTTP_PORT: u16 = 2773;
pub const DEFAULT_CACHE_SIZE: usize = 1000;
pub const DEFAULT_TTL_SECONDS: u64 = 300;
pub const DEFAULT_CLEANUP_INTERVAL: u64 = 1;

/// Sidecar configuration parameters.
///
/// Variable names follow the AWS Parameters and Secrets Lambda Extension so
/// the sidecar can stand in for it locally.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP listener port
    pub http_port: u16,
    /// Whether secret values are cached at all
    pub cache_enabled: bool,
    /// Maximum number of cached secrets
    pub cache_size: usize,
    /// Seconds a cached secret stays valid
    pub ttl_seconds: u64,
    /// Seconds between sweeps of expired entries
    pub cleanup_interval: u64,
    /// Region for the Secrets Manager client, SDK default chain when unset
    pub aws_region: Option<String>,
    /// Endpoint override for the Secrets Manager client (e.g. LocalStack)
    pub aws_endpoint: Option<String>,
}

/// The subset of configuration the cache consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum resident entries
    pub capacity: usize,
    /// Entry lifetime; `0` means entries are never served
    pub ttl_seconds: u64,
    /// `false` turns every lookup into a miss and every store into a no-op
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_SIZE,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            enabled: true,
        }
    }
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PARAMETERS_SECRETS_EXTENSION_HTTP_PORT` - HTTP port (default: 2773)
    /// - `PARAMETERS_SECRETS_EXTENSION_CACHE_ENABLED` - `false` disables caching (default: enabled)
    /// - `PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE` - Maximum cached secrets (default: 1000)
    /// - `SECRETS_MANAGER_TTL` - Cache TTL in seconds (default: 300)
    /// - `PARAMETERS_SECRETS_EXTENSION_CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    /// - `AWS_REGION` - Secrets Manager region
    /// - `AWS_ENDPOINT` - Secrets Manager endpoint override
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults. A cache size or cleanup
    /// interval of zero is rejected the same way.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_size = parse_or(
            &lookup,
            "PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE",
            DEFAULT_CACHE_SIZE,
        );
        let cleanup_interval = parse_or(
            &lookup,
            "PARAMETERS_SECRETS_EXTENSION_CLEANUP_INTERVAL",
            DEFAULT_CLEANUP_INTERVAL,
        );

        Self {
            http_port: parse_or(
                &lookup,
                "PARAMETERS_SECRETS_EXTENSION_HTTP_PORT",
                DEFAULT_HTTP_PORT,
            ),
            cache_enabled: lookup("PARAMETERS_SECRETS_EXTENSION_CACHE_ENABLED")
                .map(|v| !v.trim().eq_ignore_ascii_case("false"))
                .unwrap_or(true),
            cache_size: positive_or(
                "PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE",
                cache_size,
                DEFAULT_CACHE_SIZE,
            ),
            ttl_seconds: parse_or(&lookup, "SECRETS_MANAGER_TTL", DEFAULT_TTL_SECONDS),
            cleanup_interval: positive_or(
                "PARAMETERS_SECRETS_EXTENSION_CLEANUP_INTERVAL",
                cleanup_interval,
                DEFAULT_CLEANUP_INTERVAL,
            ),
            aws_region: non_empty(lookup("AWS_REGION")),
            aws_endpoint: non_empty(lookup("AWS_ENDPOINT")),
        }
    }

    /// Resolved cache settings.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            capacity: self.cache_size,
            ttl_seconds: self.ttl_seconds,
            enabled: self.cache_enabled,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            cache_enabled: true,
            cache_size: DEFAULT_CACHE_SIZE,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
            aws_region: None,
            aws_endpoint: None,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable {}='{}', using default", key, raw);
            default
        }),
    }
}

fn positive_or<T>(key: &str, value: T, default: T) -> T
where
    T: PartialEq + Default,
{
    if value == T::default() {
        warn!("{} must be greater than zero, using default", key);
        default
    } else {
        value
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.http_port, 2773);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_size, 1000);
        assert_eq!(config.ttl_seconds, 300);
        assert_eq!(config.cleanup_interval, 1);
        assert_eq!(config.aws_region, None);
        assert_eq!(config.aws_endpoint, None);
    }

    #[test]
    fn test_config_empty_lookup_matches_default() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_config_reads_all_variables() {
        let config = config_from(&[
            ("PARAMETERS_SECRETS_EXTENSION_HTTP_PORT", "8080"),
            ("PARAMETERS_SECRETS_EXTENSION_CACHE_ENABLED", "true"),
            ("PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE", "50"),
            ("SECRETS_MANAGER_TTL", "60"),
            ("PARAMETERS_SECRETS_EXTENSION_CLEANUP_INTERVAL", "5"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ENDPOINT", "http://localhost:4566"),
        ]);

        assert_eq!(config.http_port, 8080);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_size, 50);
        assert_eq!(config.ttl_seconds, 60);
        assert_eq!(config.cleanup_interval, 5);
        assert_eq!(config.aws_region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.aws_endpoint.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn test_cache_disabled_only_by_false() {
        let enabled = |raw: &str| {
            config_from(&[("PARAMETERS_SECRETS_EXTENSION_CACHE_ENABLED", raw)]).cache_enabled
        };

        assert!(!enabled("false"));
        assert!(!enabled(" FALSE "));
        assert!(enabled("0"));
        assert!(enabled(""));
        assert!(enabled("true"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PARAMETERS_SECRETS_EXTENSION_HTTP_PORT", "not-a-port"),
            ("PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE", "-3"),
            ("SECRETS_MANAGER_TTL", "5m"),
        ]);

        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.cache_size, DEFAULT_CACHE_SIZE);
        assert_eq!(config.ttl_seconds, DEFAULT_TTL_SECONDS);
    }

    #[test]
    fn test_zero_cache_size_and_interval_fall_back() {
        let config = config_from(&[
            ("PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE", "0"),
            ("PARAMETERS_SECRETS_EXTENSION_CLEANUP_INTERVAL", "0"),
        ]);

        assert_eq!(config.cache_size, DEFAULT_CACHE_SIZE);
        assert_eq!(config.cleanup_interval, DEFAULT_CLEANUP_INTERVAL);
    }

    #[test]
    fn test_zero_ttl_is_allowed() {
        let config = config_from(&[("SECRETS_MANAGER_TTL", "0")]);
        assert_eq!(config.ttl_seconds, 0);
    }

    #[test]
    fn test_blank_aws_settings_are_ignored() {
        let config = config_from(&[("AWS_REGION", "  "), ("AWS_ENDPOINT", "")]);
        assert_eq!(config.aws_region, None);
        assert_eq!(config.aws_endpoint, None);
    }

    #[test]
    fn test_cache_config() {
        let config = config_from(&[
            ("PARAMETERS_SECRETS_EXTENSION_CACHE_ENABLED", "false"),
            ("PARAMETERS_SECRETS_EXTENSION_CACHE_SIZE", "2"),
            ("SECRETS_MANAGER_TTL", "1"),
        ]);

        assert_eq!(
            config.cache_config(),
            CacheConfig {
                capacity: 2,
                ttl_seconds: 1,
                enabled: false,
            }
        );
        assert_eq!(Config::default().cache_config(), CacheConfig::default());
    }
}

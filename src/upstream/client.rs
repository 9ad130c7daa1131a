//! Upstream client contract
//!
//! The one operation the sidecar needs from a secret store.

use std::fmt;

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Result of a "get current secret value" call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretValueOutput {
    /// Current string value, absent for binary-only or malformed secrets
    pub secret_string: Option<String>,
}

impl SecretValueOutput {
    pub fn new(secret_string: Option<String>) -> Self {
        Self { secret_string }
    }

    /// Output carrying a value.
    pub fn with_string(value: impl Into<String>) -> Self {
        Self::new(Some(value.into()))
    }

    /// The value if it is usable, i.e. present and non-empty.
    pub fn into_usable(self) -> Option<String> {
        self.secret_string.filter(|s| !s.is_empty())
    }
}

impl fmt::Debug for SecretValueOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.secret_string.as_ref().map(|_| "<redacted>");
        f.debug_struct("SecretValueOutput")
            .field("secret_string", &shown)
            .finish()
    }
}

/// Client for the authoritative secret store.
///
/// Implementations must be safe to call from many requests at once.
#[async_trait]
pub trait SecretStoreClient: Send + Sync {
    /// Retrieves the current value of `secret_id`.
    async fn get_secret_value(&self, secret_id: &str)
        -> Result<SecretValueOutput, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_value() {
        assert_eq!(
            SecretValueOutput::with_string("s1").into_usable(),
            Some("s1".to_string())
        );
    }

    #[test]
    fn test_empty_or_missing_value_is_unusable() {
        assert_eq!(SecretValueOutput::new(None).into_usable(), None);
        assert_eq!(SecretValueOutput::with_string("").into_usable(), None);
    }

    #[test]
    fn test_debug_redacts_value() {
        let rendered = format!("{:?}", SecretValueOutput::with_string("top-secret"));
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

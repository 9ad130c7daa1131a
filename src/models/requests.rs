//! Request DTOs for the sidecar HTTP API

use serde::Deserialize;

/// Query string of `GET /secretsmanager/get`.
///
/// `secretId` is optional at this layer so that a missing parameter reaches
/// the fetcher and is rejected there like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretQuery {
    #[serde(rename = "secretId", default)]
    pub secret_id: Option<String>,
}

impl SecretQuery {
    /// The requested id, empty when the parameter was omitted.
    pub fn secret_id(&self) -> &str {
        self.secret_id.as_deref().unwrap_or_default()
    }

    /// Rejects ids that did not survive percent-decoding intact.
    ///
    /// Invalid UTF-8 in the query string decodes to U+FFFD, and such an id
    /// must not reach the upstream store.
    pub fn validate(&self) -> Option<String> {
        if self.secret_id().contains(char::REPLACEMENT_CHARACTER) {
            return Some("secretId must be valid UTF-8".to_string());
        }
        None
    }
}

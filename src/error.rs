//! Error types for the secrets sidecar
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failure reported by the upstream secret store client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The secret does not exist upstream
    #[error("secret not found")]
    NotFound,

    /// The service rejected the call (auth, throttling, invalid parameters, ...)
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },

    /// The call never produced a service response (network, timeout, decoding)
    #[error("transport error: {0}")]
    Transport(String),
}

// == Fetch Error Enum ==
/// Typed failure of a secret resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Missing or empty secret id; never reaches the cache or upstream
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The upstream call failed; nothing was cached
    #[error("Upstream error for secret '{secret_id}': {source}")]
    Upstream {
        secret_id: String,
        #[source]
        source: UpstreamError,
    },

    /// The upstream call succeeded without a usable secret string
    #[error("No secret string defined in secret '{0}'")]
    MalformedUpstreamResponse(String),
}

impl FetchError {
    /// HTTP status used when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            FetchError::Upstream {
                source: UpstreamError::NotFound,
                ..
            } => StatusCode::NOT_FOUND,
            FetchError::Upstream { .. } | FetchError::MalformedUpstreamResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the caller. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            FetchError::InvalidRequest(msg) => msg.clone(),
            FetchError::Upstream {
                source: UpstreamError::NotFound,
                ..
            } => "Secret not found".to_string(),
            FetchError::Upstream { .. } | FetchError::MalformedUpstreamResponse(_) => {
                "Failed to fetch secret".to_string()
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for secret resolution.
pub type Result<T> = std::result::Result<T, FetchError>;

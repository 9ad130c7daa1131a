//! AWS Secrets Manager client
//!
//! Implements [`SecretStoreClient`] on top of `aws-sdk-secretsmanager`.
//! Credentials come from the SDK's default provider chain.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::Client;
use tracing::info;

use crate::config::Config;
use crate::error::UpstreamError;
use crate::upstream::{SecretStoreClient, SecretValueOutput};

const NOT_FOUND_CODE: &str = "ResourceNotFoundException";

/// Secrets Manager backed [`SecretStoreClient`].
#[derive(Debug, Clone)]
pub struct AwsSecretsManagerClient {
    client: Client,
}

impl AwsSecretsManagerClient {
    /// Wraps an already configured SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the SDK defaults plus the configured region and
    /// endpoint override.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        let shared_config = loader.load().await;

        let mut builder = aws_sdk_secretsmanager::config::Builder::from(&shared_config);
        if let Some(endpoint) = &config.aws_endpoint {
            info!("Using Secrets Manager endpoint override {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl SecretStoreClient for AwsSecretsManagerClient {
    async fn get_secret_value(
        &self,
        secret_id: &str,
    ) -> Result<SecretValueOutput, UpstreamError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(classify)?;

        Ok(SecretValueOutput::new(
            output.secret_string().map(str::to_string),
        ))
    }
}

fn classify<E, R>(err: SdkError<E, R>) -> UpstreamError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match &err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            match service_err.code() {
                Some(NOT_FOUND_CODE) => UpstreamError::NotFound,
                code => UpstreamError::Service {
                    code: code.unwrap_or("Unknown").to_string(),
                    message: service_err.message().unwrap_or_default().to_string(),
                },
            }
        }
        _ => UpstreamError::Transport(DisplayErrorContext(&err).to_string()),
    }
}

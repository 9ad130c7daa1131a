//! Upstream Module
//!
//! The narrow interface to the authoritative secret store and its AWS
//! Secrets Manager implementation.

mod aws;
mod client;

pub use aws::AwsSecretsManagerClient;
pub use client::{SecretStoreClient, SecretValueOutput};

//! Object storage wrapper over AWS S3
//!
//! Provides a credential-gated S3 client plus upload/delete operations.
//! The client is built once at startup from [`S3Config`] and injected into
//! callers; when credentials are missing the store runs in a degraded mode
//! where every operation reports [`StorageError::NotConfigured`].

use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::sync::Arc;
use tracing::{error, info, warn};

pub mod config;
pub mod error;

pub use config::S3Config;
pub use error::{Result, StorageError};

/// Object storage handle shared across the service.
///
/// Cheap to clone; the underlying client is reference-counted.
#[derive(Clone)]
pub struct S3Store {
    client: Option<Arc<Client>>,
    config: S3Config,
}

impl S3Store {
    /// Build the store from configuration, constructing the S3 client only
    /// when both credentials are present.
    pub async fn connect(config: S3Config) -> Self {
        let client = if config.has_credentials() {
            let client = build_client(&config).await;
            info!(
                bucket = %config.bucket,
                region = %config.region,
                "S3 client initialized successfully"
            );
            Some(Arc::new(client))
        } else {
            warn!("AWS credentials not configured; object storage disabled");
            None
        };

        Self { client, config }
    }

    /// Build the store with credentials loaded from the environment.
    pub async fn from_env() -> Self {
        Self::connect(S3Config::from_env()).await
    }

    /// Whether a provider client is available
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Get the storage configuration
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Upload a byte payload under `key` and return its public URL
    pub async fn upload(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<String> {
        let client = self.client.as_ref().ok_or(StorageError::NotConfigured)?;

        client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                error!(key = %key, error = %e, "S3 upload failed");
                StorageError::Provider(e.to_string())
            })?;

        Ok(self.config.object_url(key))
    }

    /// Delete the object stored under `key`
    pub async fn delete(&self, key: &str) -> Result<()> {
        let client = self.client.as_ref().ok_or(StorageError::NotConfigured)?;

        client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!(key = %key, error = %e, "S3 delete failed");
                StorageError::Provider(e.to_string())
            })?;

        Ok(())
    }

    /// Health check for S3 connectivity
    pub async fn health_check(&self) -> Result<()> {
        let client = self.client.as_ref().ok_or(StorageError::NotConfigured)?;

        client
            .head_bucket()
            .bucket(&self.config.bucket)
            .send()
            .await
            .map_err(|e| StorageError::Provider(e.to_string()))?;

        Ok(())
    }
}

/// Build an AWS S3 client from static credentials in the configuration.
async fn build_client(config: &S3Config) -> Client {
    let credentials = Credentials::new(
        config.access_key_id.as_deref().unwrap_or_default(),
        config.secret_access_key.as_deref().unwrap_or_default(),
        None,
        None,
        "s3-store",
    );

    let shared_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

//! Object storage publisher for wind products (MinIO/S3 compatible).

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    aws::AmazonS3Builder, path::Path, Attribute, AttributeValue, Attributes, ObjectStore,
    PutOptions,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;
use tracing::{debug, instrument};

use wind_common::{ProductPublisher, WindError, WindResult};

/// Configuration for object storage connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectStorageConfig {
    /// S3/MinIO endpoint URL
    pub endpoint: String,
    /// Bucket name
    pub bucket: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// AWS region (use "us-east-1" for MinIO)
    pub region: String,
    /// Allow HTTP (for local MinIO)
    pub allow_http: bool,
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://minio:9000".to_string(),
            bucket: "gustlayers".to_string(),
            access_key_id: "minioadmin".to_string(),
            secret_access_key: "minioadmin".to_string(),
            region: "us-east-1".to_string(),
            allow_http: true,
        }
    }
}

impl ObjectStorageConfig {
    /// Load connection settings from `S3_*` environment variables,
    /// falling back to local-MinIO defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env::var("S3_ENDPOINT").unwrap_or(defaults.endpoint),
            bucket: env::var("S3_BUCKET").unwrap_or(defaults.bucket),
            access_key_id: env::var("S3_ACCESS_KEY").unwrap_or(defaults.access_key_id),
            secret_access_key: env::var("S3_SECRET_KEY").unwrap_or(defaults.secret_access_key),
            region: env::var("S3_REGION").unwrap_or(defaults.region),
            allow_http: env::var("S3_ALLOW_HTTP")
                .map(|v| v == "true")
                .unwrap_or(defaults.allow_http),
        }
    }
}

/// Object storage client for published wind products.
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ObjectStorage {
    /// Create a new object storage client from config.
    pub fn new(config: &ObjectStorageConfig) -> WindResult<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_endpoint(&config.endpoint)
            .with_bucket_name(&config.bucket)
            .with_access_key_id(&config.access_key_id)
            .with_secret_access_key(&config.secret_access_key)
            .with_region(&config.region);

        if config.allow_http {
            builder = builder.with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| WindError::publish(format!("failed to create S3 client: {}", e)))?;

        Ok(Self {
            store: Arc::new(store),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ProductPublisher for ObjectStorage {
    /// Write a product payload, tagged with its content type.
    #[instrument(skip(self, payload), fields(bucket = %self.bucket, key = %key))]
    async fn put(&self, key: &str, payload: Bytes, content_type: &str) -> WindResult<()> {
        let location = Path::from(key);

        let attributes = Attributes::from_iter([(
            Attribute::ContentType,
            AttributeValue::from(content_type.to_string()),
        )]);
        let mut options = PutOptions::default();
        options.attributes = attributes;

        debug!(
            size = payload.len(),
            content_type = %content_type,
            "Writing object"
        );

        self.store
            .put_opts(&location, payload.into(), options)
            .await
            .map_err(|e| WindError::publish(format!("failed to write {}: {}", key, e)))?;

        Ok(())
    }
}

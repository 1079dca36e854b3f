//! Publish contract for durable product storage.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::WindResult;

/// Writes named byte payloads to durable storage.
///
/// Fails with [`crate::WindError::Publish`] on any transport or storage
/// fault; no partial-write semantics are exposed to the caller.
#[async_trait]
pub trait ProductPublisher: Send + Sync {
    async fn put(&self, key: &str, payload: Bytes, content_type: &str) -> WindResult<()>;
}

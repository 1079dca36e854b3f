//! In-memory fakes for pipeline tests.
//!
//! These stand in for the external decode and publish collaborators so
//! the job runner can be exercised without GRIB2 payloads or object
//! storage.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use wind_common::{ProductPublisher, WindDecoder, WindError, WindField, WindResult};

/// A decoder that returns a prebuilt wind field regardless of payload.
#[derive(Debug, Clone)]
pub struct StaticDecoder {
    field: WindField,
}

impl StaticDecoder {
    pub fn new(field: WindField) -> Self {
        Self { field }
    }
}

impl WindDecoder for StaticDecoder {
    fn decode(&self, _payload: &[u8]) -> WindResult<WindField> {
        Ok(self.field.clone())
    }
}

/// A decoder that always fails, for failure-policy tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingDecoder;

impl WindDecoder for FailingDecoder {
    fn decode(&self, _payload: &[u8]) -> WindResult<WindField> {
        Err(WindError::decode("forced decode failure"))
    }
}

/// An object published through [`MemoryPublisher`].
#[derive(Debug, Clone)]
pub struct PublishedObject {
    pub key: String,
    pub payload: Bytes,
    pub content_type: String,
}

/// Records every published object in memory.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    objects: Mutex<Vec<PublishedObject>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in publish order.
    pub fn objects(&self) -> Vec<PublishedObject> {
        self.objects.lock().expect("publisher mutex poisoned").clone()
    }
}

#[async_trait]
impl ProductPublisher for MemoryPublisher {
    async fn put(&self, key: &str, payload: Bytes, content_type: &str) -> WindResult<()> {
        self.objects
            .lock()
            .expect("publisher mutex poisoned")
            .push(PublishedObject {
                key: key.to_string(),
                payload,
                content_type: content_type.to_string(),
            });
        Ok(())
    }
}

/// A publisher that always fails, for failure-policy tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPublisher;

#[async_trait]
impl ProductPublisher for FailingPublisher {
    async fn put(&self, _key: &str, _payload: Bytes, _content_type: &str) -> WindResult<()> {
        Err(WindError::publish("forced publish failure"))
    }
}

//! Storage layer for the gustlayers pipeline.
//!
//! Provides the object storage (MinIO/S3) publisher behind the
//! [`wind_common::ProductPublisher`] contract.

pub mod object_store;

pub use self::object_store::{ObjectStorage, ObjectStorageConfig};

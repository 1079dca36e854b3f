//! Forecast processor service library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod config;
pub mod jobs;
pub mod pipeline;

//! Error types for the gustlayers pipeline.

use thiserror::Error;

/// Result type alias using WindError.
pub type WindResult<T> = Result<T, WindError>;

/// Primary error type for wind product processing.
///
/// A failing step surfaces one of these, is logged with its entry
/// context, and propagates to the run level. There is no automatic
/// retry and no partial-success reporting within a single entry.
#[derive(Debug, Error)]
pub enum WindError {
    /// Malformed or unsupported input payload.
    #[error("decode error: {0}")]
    Decode(String),

    /// Unexpected mismatch between component and coordinate arrays, or
    /// a failure while deriving/resampling fields.
    #[error("compute error: {0}")]
    Compute(String),

    /// Storage-layer failure while publishing a product.
    #[error("publish error: {0}")]
    Publish(String),

    /// Invalid runtime configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to read job input.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl WindError {
    /// Create a Decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a Compute error.
    pub fn compute(msg: impl Into<String>) -> Self {
        Self::Compute(msg.into())
    }

    /// Create a Publish error.
    pub fn publish(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

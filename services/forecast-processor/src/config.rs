//! Processor configuration.

use serde::{Deserialize, Serialize};

use storage::ObjectStorageConfig;
use wind_products::DEFAULT_DENSIFY_FACTOR;

/// Entries per processing batch by default. Batching bounds memory per
/// batch only; it implies no parallelism.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Top-level processor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Object storage configuration
    pub storage: ObjectStorageConfig,

    /// Entries per processing batch
    pub batch_size: usize,

    /// Densification factor for the direction mesh
    pub densify_factor: usize,

    /// Keep processing remaining entries after a failure
    pub continue_on_error: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            storage: ObjectStorageConfig::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            densify_factor: DEFAULT_DENSIFY_FACTOR,
            continue_on_error: false,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            storage: ObjectStorageConfig::from_env(),
            batch_size: env_parse("BATCH_SIZE", DEFAULT_BATCH_SIZE),
            densify_factor: env_parse("DENSIFY_FACTOR", DEFAULT_DENSIFY_FACTOR),
            continue_on_error: std::env::var("CONTINUE_ON_ERROR")
                .map(|v| v == "true")
                .unwrap_or(false),
        }
    }
}

fn env_parse(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.densify_factor, 4);
        assert!(!config.continue_on_error);
    }
}

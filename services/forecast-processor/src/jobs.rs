//! Forecast job input: entry format, loading, batching.

use std::path::Path;

use serde::{Deserialize, Serialize};

use wind_common::{WindError, WindResult};

/// One unit of input work: an encoded grid payload and its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// Base64-encoded grid payload as fetched from the upstream source.
    pub base64_encoded_response: String,
    /// Forecast timestamp; sanitized to form the storage key fragment.
    pub timestamp: String,
}

/// Load forecast entries from a JSON input file (an array of entries).
pub fn load_entries(path: &Path) -> WindResult<Vec<ForecastEntry>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| WindError::decode(format!("invalid job input: {}", e)))
}

/// Split entries into fixed-size batches.
pub fn batches(entries: &[ForecastEntry], batch_size: usize) -> impl Iterator<Item = &[ForecastEntry]> {
    entries.chunks(batch_size.max(1))
}

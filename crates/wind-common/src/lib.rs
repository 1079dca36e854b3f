//! Common types and contracts shared across the gustlayers workspace.

pub mod bbox;
pub mod decode;
pub mod error;
pub mod field;
pub mod keys;
pub mod publish;

pub use bbox::BoundingBox;
pub use decode::WindDecoder;
pub use error::{WindError, WindResult};
pub use field::{PointValue, SampleSet, WindField};
pub use keys::{sanitize_timestamp, ProductKey, CSV_CONTENT_TYPE, GEOJSON_CONTENT_TYPE};
pub use publish::ProductPublisher;

//! Storage key construction for published products.

/// Content type of the densified-direction GeoJSON product.
pub const GEOJSON_CONTENT_TYPE: &str = "application/json";

/// Content type of the tabular speed/direction product.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Sanitize a forecast timestamp into a storage key fragment.
///
/// Colons, spaces and hyphens each become an underscore, so
/// `2024-01-01 12:00:00` maps to `2024_01_01_12_00_00`.
pub fn sanitize_timestamp(timestamp: &str) -> String {
    timestamp.replace([':', ' ', '-'], "_")
}

/// Key builder for consistent product layout in the bucket.
pub struct ProductKey;

impl ProductKey {
    /// Key of the densified-direction product.
    /// Format: geojson/{sanitized timestamp}.geojson
    pub fn geojson(timestamp: &str) -> String {
        format!("geojson/{}.geojson", sanitize_timestamp(timestamp))
    }

    /// Key of the tabular speed/direction product.
    /// Format: csv/{sanitized timestamp}.csv
    pub fn csv(timestamp: &str) -> String {
        format!("csv/{}.csv", sanitize_timestamp(timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_timestamp() {
        assert_eq!(
            sanitize_timestamp("2024-01-01 12:00:00"),
            "2024_01_01_12_00_00"
        );
        assert_eq!(sanitize_timestamp("plain"), "plain");
    }

    #[test]
    fn test_product_keys() {
        assert_eq!(
            ProductKey::geojson("2024-01-01 12:00:00"),
            "geojson/2024_01_01_12_00_00.geojson"
        );
        assert_eq!(
            ProductKey::csv("2024-01-01 12:00:00"),
            "csv/2024_01_01_12_00_00.csv"
        );
    }
}

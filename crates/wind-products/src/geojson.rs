//! GeoJSON serialization of the densified direction product.
//!
//! The payload is a plain FeatureCollection of point features, each
//! carrying a `wind_direction` property:
//!
//! ```json
//! {"type": "Feature",
//!  "properties": {"wind_direction": 270.0},
//!  "geometry": {"type": "Point", "coordinates": [-10.0, 42.0]}}
//! ```

use serde::{Deserialize, Serialize};

use wind_common::{PointValue, WindError, WindResult};

/// A GeoJSON FeatureCollection of wind-direction point features.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of point features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Build a collection from resampled direction points, preserving
    /// mesh traversal order. Order carries no meaning for consumers.
    pub fn from_direction_points(points: &[PointValue]) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: points
                .iter()
                .map(|p| Feature::direction(p.lon, p.lat, p.value))
                .collect(),
        }
    }

    /// Serialize to a JSON payload.
    pub fn to_json(&self) -> WindResult<String> {
        serde_json::to_string(self)
            .map_err(|e| WindError::compute(format!("GeoJSON serialization failed: {}", e)))
    }
}

/// A single wind-direction point feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// Derived scalar carried by this feature.
    pub properties: DirectionProperties,

    /// Point geometry of the mesh position.
    pub geometry: PointGeometry,
}

impl Feature {
    /// Create a point feature carrying a wind direction in degrees.
    pub fn direction(lon: f64, lat: f64, wind_direction: f64) -> Self {
        Self {
            type_: "Feature".to_string(),
            properties: DirectionProperties { wind_direction },
            geometry: PointGeometry {
                type_: "Point".to_string(),
                coordinates: [lon, lat],
            },
        }
    }
}

/// Properties of a direction feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionProperties {
    /// Wind direction in degrees, `[0, 360)`, blows-from convention.
    pub wind_direction: f64,
}

/// A GeoJSON point geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointGeometry {
    /// Type identifier (always "Point").
    #[serde(rename = "type")]
    pub type_: String,

    /// Coordinates as [longitude, latitude].
    pub coordinates: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<PointValue> {
        vec![
            PointValue {
                lon: -10.0,
                lat: 40.0,
                value: 270.0,
            },
            PointValue {
                lon: -9.5,
                lat: 40.0,
                value: 180.0,
            },
        ]
    }

    #[test]
    fn test_feature_collection_shape() {
        let collection = FeatureCollection::from_direction_points(&sample_points());
        let json: serde_json::Value =
            serde_json::from_str(&collection.to_json().unwrap()).unwrap();

        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"].as_array().unwrap().len(), 2);

        let feature = &json["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["properties"]["wind_direction"], 270.0);
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"][0], -10.0);
        assert_eq!(feature["geometry"]["coordinates"][1], 40.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let collection = FeatureCollection::from_direction_points(&sample_points());
        assert_eq!(collection.features[0].properties.wind_direction, 270.0);
        assert_eq!(collection.features[1].properties.wind_direction, 180.0);
    }

    #[test]
    fn test_empty_collection() {
        let collection = FeatureCollection::from_direction_points(&[]);
        assert_eq!(
            collection.to_json().unwrap(),
            r#"{"type":"FeatureCollection","features":[]}"#
        );
    }

    #[test]
    fn test_round_trips_through_serde() {
        let collection = FeatureCollection::from_direction_points(&sample_points());
        let parsed: FeatureCollection =
            serde_json::from_str(&collection.to_json().unwrap()).unwrap();
        assert_eq!(parsed, collection);
    }
}

//! CSV serialization of the speed/direction table product.

use serde::{Deserialize, Serialize};

use wind_common::{WindError, WindField, WindResult};

const HEADER: [&str; 6] = [
    "Latitude",
    "Longitude",
    "U_component_of_wind",
    "V_component_of_wind",
    "Wind_speed",
    "Wind_direction",
];

/// One row of the tabular product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindRow {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "U_component_of_wind")]
    pub u_component: f64,
    #[serde(rename = "V_component_of_wind")]
    pub v_component: f64,
    #[serde(rename = "Wind_speed")]
    pub wind_speed: f64,
    #[serde(rename = "Wind_direction")]
    pub wind_direction: f64,
}

/// Serialize a wind field and its derived scalars to CSV.
///
/// One row per source grid cell, in flattened source order; no
/// resampling. Pure: returns the payload as a string.
pub fn wind_table(field: &WindField, speed: &[f64], direction: &[f64]) -> WindResult<String> {
    field.validate()?;
    if speed.len() != field.len() || direction.len() != field.len() {
        return Err(WindError::compute(format!(
            "derived arrays disagree with field: field={}, speed={}, direction={}",
            field.len(),
            speed.len(),
            direction.len()
        )));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    if field.is_empty() {
        // serialize() only emits the header with the first row
        writer
            .write_record(HEADER)
            .map_err(|e| WindError::compute(format!("CSV write failed: {}", e)))?;
    }

    for i in 0..field.len() {
        writer
            .serialize(WindRow {
                latitude: field.lats[i],
                longitude: field.lons[i],
                u_component: field.u[i],
                v_component: field.v[i],
                wind_speed: speed[i],
                wind_direction: direction[i],
            })
            .map_err(|e| WindError::compute(format!("CSV write failed: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WindError::compute(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| WindError::compute(format!("CSV is not UTF-8: {}", e)))
}

/// Parse a tabular payload back into rows.
///
/// Consumer-side counterpart of [`wind_table`].
pub fn parse_wind_table(payload: &str) -> WindResult<Vec<WindRow>> {
    let mut reader = csv::Reader::from_reader(payload.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<WindRow>, _>>()
        .map_err(|e| WindError::compute(format!("CSV parse failed: {}", e)))
}

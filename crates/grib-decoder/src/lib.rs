//! GRIB2 wind-field decoder.
//!
//! Implements the [`WindDecoder`] contract on top of the `grib` crate:
//! finds the U and V wind component submessages in an encoded GRIB2
//! payload and collects their grid coordinates and unpacked values into
//! a [`WindField`]. Decoding is fully in-memory; the transient payload
//! buffer is scope-bound and released on every path.

use std::io::Cursor;

use grib::Grib2SubmessageDecoder;
use tracing::debug;

use wind_common::{WindDecoder, WindError, WindField, WindResult};

// GRIB2 code table 4.2 identification of the wind components:
// discipline 0 (meteorological), category 2 (momentum).
const METEOROLOGICAL_DISCIPLINE: u8 = 0;
const MOMENTUM_CATEGORY: u8 = 2;
const U_COMPONENT_OF_WIND: u8 = 2;
const V_COMPONENT_OF_WIND: u8 = 3;

/// Decoder for GRIB2-encoded wind fields.
///
/// The first U-component and first V-component submessages found in the
/// payload are used; additional levels are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct GribWindDecoder;

impl GribWindDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl WindDecoder for GribWindDecoder {
    fn decode(&self, payload: &[u8]) -> WindResult<WindField> {
        let reader = Cursor::new(payload.to_vec());
        let grib2 = grib::from_reader(reader)
            .map_err(|e| WindError::decode(format!("unreadable GRIB2 payload: {:?}", e)))?;

        let mut u: Option<Vec<f64>> = None;
        let mut v: Option<Vec<f64>> = None;
        let mut coordinates: Option<(Vec<f64>, Vec<f64>)> = None;

        for (_index, submessage) in grib2.iter() {
            if submessage.indicator().discipline != METEOROLOGICAL_DISCIPLINE {
                continue;
            }

            let category = submessage.prod_def().parameter_category();
            let number = submessage.prod_def().parameter_number();
            let (Some(category), Some(number)) = (category, number) else {
                continue;
            };
            if category != MOMENTUM_CATEGORY {
                continue;
            }

            let slot = match number {
                U_COMPONENT_OF_WIND => &mut u,
                V_COMPONENT_OF_WIND => &mut v,
                _ => continue,
            };
            if slot.is_some() {
                continue;
            }

            // both components share one grid; read it once
            if coordinates.is_none() {
                let latlons = submessage.latlons().map_err(|e| {
                    WindError::decode(format!("grid coordinates unavailable: {:?}", e))
                })?;
                let mut lats = Vec::new();
                let mut lons = Vec::new();
                for (lat, lon) in latlons {
                    lats.push(f64::from(lat));
                    lons.push(f64::from(lon));
                }
                coordinates = Some((lats, lons));
            }

            let decoder = Grib2SubmessageDecoder::from(submessage)
                .map_err(|e| WindError::decode(format!("failed to prepare unpacking: {:?}", e)))?;
            let values = decoder
                .dispatch()
                .map_err(|e| WindError::decode(format!("failed to unpack values: {:?}", e)))?;
            *slot = Some(values.map(f64::from).collect());

            if u.is_some() && v.is_some() {
                break;
            }
        }

        let u = u.ok_or_else(|| WindError::decode("no U component of wind in payload"))?;
        let v = v.ok_or_else(|| WindError::decode("no V component of wind in payload"))?;
        let (lats, lons) =
            coordinates.ok_or_else(|| WindError::decode("no grid coordinates in payload"))?;

        debug!(points = u.len(), "Decoded wind component grids");

        WindField::new(lats, lons, u, v)
    }
}

//! Derived scalar fields from wind component grids.

use wind_common::{WindError, WindResult};

/// Conversion factor from meters per second to knots.
pub const MS_TO_KNOTS: f64 = 1.94384;

/// Compute wind speed in knots from U/V components in m/s.
///
/// Output is index-aligned with the inputs; NaN components propagate to
/// NaN speeds and are handled downstream.
pub fn wind_speed(u: &[f64], v: &[f64]) -> WindResult<Vec<f64>> {
    check_components(u, v)?;

    Ok(u.iter()
        .zip(v)
        .map(|(&u, &v)| (u * u + v * v).sqrt() * MS_TO_KNOTS)
        .collect())
}

/// Compute wind direction in degrees, normalized into `[0, 360)`.
///
/// Direction follows the meteorological convention: the compass bearing
/// the wind blows *from*, hence both components are negated before
/// `atan2`. A zero-magnitude vector maps to 0° (the calm-air sentinel),
/// since `atan2(0, 0)` is defined as 0.
pub fn wind_direction(u: &[f64], v: &[f64]) -> WindResult<Vec<f64>> {
    check_components(u, v)?;

    Ok(u.iter()
        .zip(v)
        .map(|(&u, &v)| {
            let degrees = (-u).atan2(-v).to_degrees().rem_euclid(360.0);
            // rem_euclid can round up to exactly 360.0 for tiny negative angles
            if degrees >= 360.0 {
                0.0
            } else {
                degrees
            }
        })
        .collect())
}

fn check_components(u: &[f64], v: &[f64]) -> WindResult<()> {
    if u.len() != v.len() {
        return Err(WindError::compute(format!(
            "component arrays disagree: u={}, v={}",
            u.len(),
            v.len()
        )));
    }
    Ok(())
}

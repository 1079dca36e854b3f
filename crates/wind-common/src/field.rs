//! Wind field and sample set types.

use crate::error::{WindError, WindResult};

/// A decoded wind field: flattened (row-major) coordinate and component
/// arrays produced by one decode.
///
/// All four arrays are index-aligned; `lats[i]`/`lons[i]` locate the
/// grid point holding components `u[i]`/`v[i]` (meters per second).
#[derive(Debug, Clone, PartialEq)]
pub struct WindField {
    /// Latitude of each grid point, degrees north.
    pub lats: Vec<f64>,
    /// Longitude of each grid point, degrees east.
    pub lons: Vec<f64>,
    /// U (west-to-east) wind component, m/s.
    pub u: Vec<f64>,
    /// V (south-to-north) wind component, m/s.
    pub v: Vec<f64>,
}

impl WindField {
    /// Create a wind field, checking that all arrays share one length.
    pub fn new(lats: Vec<f64>, lons: Vec<f64>, u: Vec<f64>, v: Vec<f64>) -> WindResult<Self> {
        let field = Self { lats, lons, u, v };
        field.validate()?;
        Ok(field)
    }

    /// Check the shared-length invariant.
    ///
    /// A mismatch should not occur given a correct decode, but is
    /// guarded here rather than trusted.
    pub fn validate(&self) -> WindResult<()> {
        let n = self.lats.len();
        if self.lons.len() != n || self.u.len() != n || self.v.len() != n {
            return Err(WindError::compute(format!(
                "coordinate/component arrays disagree: lats={}, lons={}, u={}, v={}",
                self.lats.len(),
                self.lons.len(),
                self.u.len(),
                self.v.len()
            )));
        }
        Ok(())
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.lats.len()
    }

    /// Check if the field has no grid points.
    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }
}

/// Flattened (lon, lat, value) samples — the exchange form fed to the
/// scattered-data resampler.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub lons: Vec<f64>,
    pub lats: Vec<f64>,
    pub values: Vec<f64>,
}

impl SampleSet {
    /// Create a sample set, checking that all arrays share one length.
    pub fn new(lons: Vec<f64>, lats: Vec<f64>, values: Vec<f64>) -> WindResult<Self> {
        if lons.len() != lats.len() || lons.len() != values.len() {
            return Err(WindError::compute(format!(
                "sample arrays disagree: lons={}, lats={}, values={}",
                lons.len(),
                lats.len(),
                values.len()
            )));
        }
        Ok(Self { lons, lats, values })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.lons.len()
    }

    /// Check if the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.lons.is_empty()
    }
}

/// One surviving mesh point of a resampled product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointValue {
    pub lon: f64,
    pub lat: f64,
    pub value: f64,
}

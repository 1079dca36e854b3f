//! Scattered-data interpolation onto target meshes.

use spade::{DelaunayTriangulation, FloatTriangulation, HasPosition, Point2, Triangulation};
use tracing::debug;

use wind_common::{PointValue, SampleSet, WindError, WindResult};

use crate::mesh::TargetMesh;

/// Interpolates scattered samples at arbitrary query points.
///
/// `None` marks a query outside the interpolation domain. Callers must
/// exclude such points from output — never substitute a default or
/// extrapolate beyond the observed samples.
pub trait ScatteredInterpolator {
    fn interpolate(&self, lon: f64, lat: f64) -> Option<f64>;
}

struct Sample {
    position: Point2<f64>,
    value: f64,
}

impl HasPosition for Sample {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// Linear barycentric interpolation over a Delaunay triangulation of
/// the sample (lon, lat) positions.
///
/// Queries outside the convex hull of the samples resolve to `None`.
/// For a fixed sample set the triangulation, and therefore every
/// interpolated value, is reproducible bit for bit.
pub struct TinInterpolator {
    triangulation: DelaunayTriangulation<Sample>,
}

impl TinInterpolator {
    /// Triangulate a sample set.
    ///
    /// Sample positions must be finite; sample values may be NaN, which
    /// propagates into interpolated values and is excluded at output.
    pub fn new(samples: &SampleSet) -> WindResult<Self> {
        let mut vertices = Vec::with_capacity(samples.len());
        for ((&lon, &lat), &value) in samples.lons.iter().zip(&samples.lats).zip(&samples.values) {
            if !lon.is_finite() || !lat.is_finite() {
                return Err(WindError::compute(format!(
                    "non-finite sample position ({}, {})",
                    lon, lat
                )));
            }
            vertices.push(Sample {
                position: Point2::new(lon, lat),
                value,
            });
        }

        let triangulation = DelaunayTriangulation::bulk_load(vertices)
            .map_err(|e| WindError::compute(format!("triangulation failed: {}", e)))?;

        debug!(
            vertices = triangulation.num_vertices(),
            "Triangulated sample set"
        );

        Ok(Self { triangulation })
    }
}

impl ScatteredInterpolator for TinInterpolator {
    fn interpolate(&self, lon: f64, lat: f64) -> Option<f64> {
        self.triangulation
            .barycentric()
            .interpolate(|vertex| vertex.data().value, Point2::new(lon, lat))
    }
}

/// Resample scattered samples onto a target mesh.
///
/// Mesh points outside the interpolation domain, or whose interpolated
/// value is not finite, are dropped from the output. Point order is the
/// mesh traversal order.
pub fn resample<I: ScatteredInterpolator>(interpolator: &I, mesh: &TargetMesh) -> Vec<PointValue> {
    mesh.points()
        .filter_map(|(lon, lat)| {
            interpolator
                .interpolate(lon, lat)
                .filter(|value| value.is_finite())
                .map(|value| PointValue { lon, lat, value })
        })
        .collect()
}

//! Target mesh construction for densified products.

use wind_common::{BoundingBox, WindError, WindResult};

/// Default densification factor relative to the source grid resolution.
pub const DEFAULT_DENSIFY_FACTOR: usize = 4;

/// A regular lon/lat mesh spanning the bounding box of a source grid.
///
/// Axis resolution is the number of distinct source coordinate values
/// along that axis multiplied by the densification factor, so output
/// density tracks input resolution instead of hard-coding counts. The
/// factor is the primary cost lever: mesh point count grows with its
/// square.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMesh {
    lons: Vec<f64>,
    lats: Vec<f64>,
}

impl TargetMesh {
    /// Build a mesh covering the given source coordinates.
    pub fn from_source(lons: &[f64], lats: &[f64], factor: usize) -> WindResult<Self> {
        if factor == 0 {
            return Err(WindError::compute("densification factor must be positive"));
        }

        let bbox = BoundingBox::from_points(lons, lats)
            .ok_or_else(|| WindError::compute("no finite source coordinates to mesh"))?;

        Ok(Self {
            lons: linspace(bbox.min_lon, bbox.max_lon, distinct_count(lons) * factor),
            lats: linspace(bbox.min_lat, bbox.max_lat, distinct_count(lats) * factor),
        })
    }

    /// Mesh points along the longitude axis.
    pub fn width(&self) -> usize {
        self.lons.len()
    }

    /// Mesh points along the latitude axis.
    pub fn height(&self) -> usize {
        self.lats.len()
    }

    /// Total number of mesh points.
    pub fn len(&self) -> usize {
        self.lons.len() * self.lats.len()
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate mesh points as (lon, lat) in row-major order (latitude
    /// outer, longitude inner).
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lats
            .iter()
            .flat_map(move |&lat| self.lons.iter().map(move |&lon| (lon, lat)))
    }
}

/// Number of distinct finite values in a coordinate array.
fn distinct_count(values: &[f64]) -> usize {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    finite.sort_by(f64::total_cmp);
    finite.dedup();
    finite.len()
}

/// Evenly spaced values from `start` to `stop`, endpoints inclusive.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start];
    }

    let step = (stop - start) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            // pin the last point so the mesh never overshoots the hull
            if i + 1 == count {
                stop
            } else {
                start + step * i as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_densification_counts() {
        // 2x3 grid: 2 distinct lats, 3 distinct lons
        let lats = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let lons = vec![0.0, 0.5, 1.0, 0.0, 0.5, 1.0];

        let mesh = TargetMesh::from_source(&lons, &lats, 4).unwrap();
        assert_eq!(mesh.width(), 12);
        assert_eq!(mesh.height(), 8);
        assert_eq!(mesh.len(), 96);
    }

    #[test]
    fn test_mesh_spans_source_bounds() {
        let lats = vec![40.0, 40.0, 42.0, 42.0];
        let lons = vec![-10.0, -8.0, -10.0, -8.0];

        let mesh = TargetMesh::from_source(&lons, &lats, 2).unwrap();
        let points: Vec<(f64, f64)> = mesh.points().collect();

        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert_approx_eq!(first.0, -10.0, 1e-12);
        assert_approx_eq!(first.1, 40.0, 1e-12);
        // endpoints are pinned exactly
        assert_eq!(last.0, -8.0);
        assert_eq!(last.1, 42.0);
    }

    #[test]
    fn test_row_major_traversal() {
        let lats = vec![0.0, 1.0];
        let lons = vec![0.0, 1.0];

        let mesh = TargetMesh::from_source(&lons, &lats, 1).unwrap();
        let points: Vec<(f64, f64)> = mesh.points().collect();

        // latitude outer, longitude inner
        assert_eq!(points, vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_single_coordinate_axis() {
        // one distinct latitude collapses that axis to a single value
        let lats = vec![5.0, 5.0];
        let lons = vec![0.0, 1.0];

        let mesh = TargetMesh::from_source(&lons, &lats, 4).unwrap();
        assert_eq!(mesh.width(), 8);
        assert_eq!(mesh.height(), 4);
        assert!(mesh.points().all(|(_, lat)| lat == 5.0));
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(TargetMesh::from_source(&[], &[], 4).is_err());
        assert!(TargetMesh::from_source(&[0.0], &[0.0], 0).is_err());
        assert!(TargetMesh::from_source(&[f64::NAN], &[f64::NAN], 4).is_err());
    }
}

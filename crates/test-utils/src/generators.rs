//! Deterministic generators for synthetic wind fields.
//!
//! These generators create predictable, verifiable grids that can be
//! used across the test suite without external data files.

use wind_common::WindField;

/// Creates a uniform wind field on a `rows x cols` grid.
///
/// Every grid point carries the same `(u, v)` components. Latitude and
/// longitude each span `[0, 1]` (a unit square), laid out row-major
/// with latitude varying by row and longitude by column.
///
/// # Example
///
/// ```
/// use test_utils::uniform_wind_field;
///
/// let field = uniform_wind_field(2, 2, 1.0, 0.0);
/// assert_eq!(field.len(), 4);
/// assert_eq!(field.lats, vec![0.0, 0.0, 1.0, 1.0]);
/// assert_eq!(field.lons, vec![0.0, 1.0, 0.0, 1.0]);
/// ```
pub fn uniform_wind_field(rows: usize, cols: usize, u: f64, v: f64) -> WindField {
    let mut lats = Vec::with_capacity(rows * cols);
    let mut lons = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            lats.push(axis_value(row, rows));
            lons.push(axis_value(col, cols));
        }
    }

    let n = rows * cols;
    WindField::new(lats, lons, vec![u; n], vec![v; n])
        .expect("generated arrays share one length")
}

/// Creates a wind field with components varying across the grid.
///
/// `u` grows with the column index and `v` with the row index, so every
/// grid point has a distinct, predictable wind vector.
pub fn graded_wind_field(rows: usize, cols: usize) -> WindField {
    let mut lats = Vec::with_capacity(rows * cols);
    let mut lons = Vec::with_capacity(rows * cols);
    let mut u = Vec::with_capacity(rows * cols);
    let mut v = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            lats.push(axis_value(row, rows));
            lons.push(axis_value(col, cols));
            u.push(col as f64 + 1.0);
            v.push(row as f64 + 1.0);
        }
    }

    WindField::new(lats, lons, u, v).expect("generated arrays share one length")
}

fn axis_value(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

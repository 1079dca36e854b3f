//! Derived wind products.
//!
//! This crate holds the numerical core of the pipeline:
//!
//! - Derived scalar fields (speed in knots, blows-from direction in
//!   degrees) from U/V component grids
//! - Target mesh construction and scattered-data resampling over a
//!   Delaunay triangulation, with an explicit out-of-domain policy
//! - Product serializers: a GeoJSON point-feature collection for the
//!   densified direction product and a CSV table at source resolution

pub mod derive;
pub mod geojson;
pub mod interpolate;
pub mod mesh;
pub mod table;

pub use derive::{wind_direction, wind_speed, MS_TO_KNOTS};
pub use geojson::{Feature, FeatureCollection, PointGeometry};
pub use interpolate::{resample, ScatteredInterpolator, TinInterpolator};
pub use mesh::{TargetMesh, DEFAULT_DENSIFY_FACTOR};
pub use table::{parse_wind_table, wind_table, WindRow};

//! Fast approximate distances between geographic coordinates.
//!
//! The reference ellipsoid is linearized around a representative latitude:
//! [`scale_factors`] turns one degree of latitude and of longitude into a
//! linear distance at that latitude, and [`distance`] / [`path_length`]
//! apply flat-plane Euclidean formulas on top of those factors.
//!
//! Every operation is generic over the floating-point type, so the same
//! algorithm serves both `f64` and `f32` callers. [`Real`] names the
//! precision chosen for the build.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{EllipsoidError, FlatgeoError, PathError, Result};
pub use geometry::{Coordinate, Ellipsoid, Unit, WGS84_SEMI_MAJOR_KM, WGS84_SEMI_MINOR_KM};
pub use math::Real;
pub use operations::{
    distance, path_length, path_length_split, scale_factors, scale_factors_with, ScaleFactors,
};

use nalgebra::RealField;

use crate::error::Result;
use crate::geometry::{Coordinate, Ellipsoid, Unit};
use crate::math::{degree, Real};

use super::{distance, path_length};

/// Linear distance per degree of latitude and of longitude.
///
/// Valid near the latitude the factors were derived at; the error grows
/// with distance from that latitude and towards the poles, where the
/// east-west factor goes to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors<T = Real> {
    /// Units per degree of latitude (north-south).
    pub lat: T,
    /// Units per degree of longitude (east-west).
    pub lon: T,
}

impl<T: RealField + Copy> ScaleFactors<T> {
    /// Derives WGS84 factors at `lat` degrees for a catalog unit.
    #[must_use]
    pub fn for_unit(lat: T, unit: Unit) -> Self {
        scale_factors(lat, unit.multiplier())
    }

    /// Planar distance between two coordinates using these factors.
    #[must_use]
    pub fn distance(&self, a: &Coordinate<T>, b: &Coordinate<T>) -> T {
        distance(a.lat, a.lon, b.lat, b.lon, self.lat, self.lon)
    }

    /// Sum of planar distances along `points`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PathError::Empty`] if `points` is empty.
    pub fn path_length(&self, points: &[Coordinate<T>]) -> Result<T> {
        path_length(points, self.lat, self.lon)
    }
}

/// Derives scale factors on the WGS84 ellipsoid.
///
/// `lat` is the reference latitude in degrees and `unit_multiplier` is the
/// number of output units per kilometer (see [`Unit`]). Inputs are not
/// checked: NaN, out-of-range latitudes or non-positive multipliers
/// propagate through the arithmetic.
#[must_use]
pub fn scale_factors<T: RealField + Copy>(lat: T, unit_multiplier: T) -> ScaleFactors<T> {
    scale_factors_with(&Ellipsoid::wgs84(), lat, unit_multiplier)
}

/// Derives scale factors on an arbitrary reference ellipsoid.
///
/// The north-south factor is the meridional radius of curvature and the
/// east-west factor the prime vertical radius scaled by `cos(lat)`, both
/// converted from kilometers per radian to units per degree.
#[must_use]
pub fn scale_factors_with<T: RealField + Copy>(
    ellipsoid: &Ellipsoid<T>,
    lat: T,
    unit_multiplier: T,
) -> ScaleFactors<T> {
    let degree = degree::<T>();
    let cos_lat = (lat * degree).cos();
    let (meridional, prime_vertical) = ellipsoid.radii_of_curvature(cos_lat);

    let factors = ScaleFactors {
        lat: degree * meridional * unit_multiplier,
        lon: degree * cos_lat * prime_vertical * unit_multiplier,
    };
    tracing::trace!(
        %lat,
        %unit_multiplier,
        lat_factor = %factors.lat,
        lon_factor = %factors.lon,
        "derived scale factors"
    );
    factors
}

use nalgebra::RealField;

use crate::error::{EllipsoidError, Result};
use crate::math::literal;

/// WGS84 semi-major axis in kilometers.
pub const WGS84_SEMI_MAJOR_KM: f64 = 6_378.137;

/// WGS84 semi-minor axis in kilometers.
pub const WGS84_SEMI_MINOR_KM: f64 = 6_356.752_314_245;

/// A reference ellipsoid of revolution, axes in kilometers.
///
/// Immutable once built. [`Ellipsoid::wgs84`] is the canonical instance and
/// the one used by [`crate::scale_factors`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid<T> {
    semi_major: T,
    semi_minor: T,
}

impl<T: RealField + Copy> Ellipsoid<T> {
    /// Creates a new ellipsoid from its axis lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is not strictly positive (NaN
    /// included), or if the semi-minor axis is longer than the semi-major
    /// axis.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(semi_major: T, semi_minor: T) -> Result<Self> {
        let zero = nalgebra::zero::<T>();
        if !(semi_major > zero) {
            return Err(EllipsoidError::NonPositiveAxis {
                axis: "semi-major",
                value: semi_major.to_string(),
            }
            .into());
        }
        if !(semi_minor > zero) {
            return Err(EllipsoidError::NonPositiveAxis {
                axis: "semi-minor",
                value: semi_minor.to_string(),
            }
            .into());
        }
        if semi_minor > semi_major {
            return Err(EllipsoidError::MinorExceedsMajor {
                semi_major: semi_major.to_string(),
                semi_minor: semi_minor.to_string(),
            }
            .into());
        }
        Ok(Self {
            semi_major,
            semi_minor,
        })
    }

    /// The WGS84 reference ellipsoid.
    #[must_use]
    pub fn wgs84() -> Self {
        Self {
            semi_major: literal(WGS84_SEMI_MAJOR_KM),
            semi_minor: literal(WGS84_SEMI_MINOR_KM),
        }
    }

    #[must_use]
    pub fn semi_major(&self) -> T {
        self.semi_major
    }

    #[must_use]
    pub fn semi_minor(&self) -> T {
        self.semi_minor
    }

    /// Flattening `f = (a - b) / a`.
    #[must_use]
    pub fn flattening(&self) -> T {
        (self.semi_major - self.semi_minor) / self.semi_major
    }

    /// Squared eccentricity `e² = f * (2 - f)`.
    #[must_use]
    pub fn eccentricity_squared(&self) -> T {
        let f = self.flattening();
        f * (literal::<T>(2.0) - f)
    }

    /// Radius of curvature in the meridian (north-south) at `lat_rad`.
    #[must_use]
    pub fn meridional_radius(&self, lat_rad: T) -> T {
        self.radii_of_curvature(lat_rad.cos()).0
    }

    /// Radius of curvature in the prime vertical (east-west) at `lat_rad`.
    #[must_use]
    pub fn prime_vertical_radius(&self, lat_rad: T) -> T {
        self.radii_of_curvature(lat_rad.cos()).1
    }

    /// Meridional and prime vertical radii of curvature from the cosine of
    /// the latitude.
    ///
    /// `sin²` is taken as `1 - cos²` so callers that already hold the cosine
    /// avoid a second transcendental call.
    #[must_use]
    pub fn radii_of_curvature(&self, cos_lat: T) -> (T, T) {
        let one = nalgebra::one::<T>();
        let e2 = self.eccentricity_squared();
        let v = (one - e2 * (one - cos_lat * cos_lat)).sqrt();
        let meridional = self.semi_major * (one - e2) / (v * v * v);
        let prime_vertical = self.semi_major / v;
        (meridional, prime_vertical)
    }
}

impl<T: RealField + Copy> Default for Ellipsoid<T> {
    fn default() -> Self {
        Self::wgs84()
    }
}

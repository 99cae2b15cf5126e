use crate::math::Real;

/// A geographic position in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Neither is validated nor clamped; out-of-range values simply flow
/// through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate<T = Real> {
    pub lat: T,
    pub lon: T,
}

impl<T> Coordinate<T> {
    /// Creates a new coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: T, lon: T) -> Self {
        Self { lat, lon }
    }
}

impl<T> From<(T, T)> for Coordinate<T> {
    fn from((lat, lon): (T, T)) -> Self {
        Self { lat, lon }
    }
}

impl<T> From<Coordinate<T>> for (T, T) {
    fn from(value: Coordinate<T>) -> Self {
        (value.lat, value.lon)
    }
}

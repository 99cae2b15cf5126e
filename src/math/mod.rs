use nalgebra::RealField;

/// Floating-point type used by the build.
///
/// Double width unless the `single-precision` feature is enabled. The
/// generic operations accept either precision regardless; this alias only
/// fixes the default for callers that do not care.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Floating-point type used by the build.
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// 2D vector type for offsets in the linearized plane.
pub type Vector2<T> = nalgebra::Vector2<T>;

/// Radians per degree, in the precision of `T`.
#[must_use]
pub fn degree<T: RealField + Copy>() -> T {
    T::pi() / literal(180.0)
}

/// Converts an `f64` constant into `T`.
#[must_use]
pub fn literal<T: RealField + Copy>(value: f64) -> T {
    nalgebra::convert(value)
}

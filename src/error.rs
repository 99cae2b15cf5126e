use thiserror::Error;

/// Top-level error type for the flatgeo library.
#[derive(Debug, Error)]
pub enum FlatgeoError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Ellipsoid(#[from] EllipsoidError),
}

/// Errors related to polyline length evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path must contain at least one point")]
    Empty,

    #[error("latitude and longitude sequences differ in length ({lats} vs {lons})")]
    LengthMismatch { lats: usize, lons: usize },
}

/// Errors related to reference ellipsoid construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EllipsoidError {
    #[error("{axis} axis must be positive, got {value}")]
    NonPositiveAxis { axis: &'static str, value: String },

    #[error("semi-minor axis {semi_minor} exceeds semi-major axis {semi_major}")]
    MinorExceedsMajor {
        semi_major: String,
        semi_minor: String,
    },
}

/// Convenience type alias for results using [`FlatgeoError`].
pub type Result<T> = std::result::Result<T, FlatgeoError>;

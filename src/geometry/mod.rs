pub mod coordinate;
pub mod ellipsoid;
pub mod unit;

pub use coordinate::Coordinate;
pub use ellipsoid::{Ellipsoid, WGS84_SEMI_MAJOR_KM, WGS84_SEMI_MINOR_KM};
pub use unit::Unit;

use nalgebra::RealField;

use crate::math::literal;

/// Linear units the scale factors can be expressed in.
///
/// Each unit maps to a multiplier in "units per kilometer", the native unit
/// of the ellipsoid axes. Callers that need anything else can pass a raw
/// multiplier to [`crate::scale_factors`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Kilometers,
    Meters,
    Miles,
    Feet,
    NauticalMiles,
}

impl Unit {
    /// Every unit in the catalog.
    pub const ALL: [Unit; 5] = [
        Unit::Kilometers,
        Unit::Meters,
        Unit::Miles,
        Unit::Feet,
        Unit::NauticalMiles,
    ];

    /// Units per kilometer, in double precision.
    #[must_use]
    pub const fn per_kilometer(self) -> f64 {
        match self {
            Unit::Kilometers => 1.0,
            Unit::Meters => 1000.0,
            Unit::Miles => 0.621_371_19,
            Unit::Feet => 3280.84,
            Unit::NauticalMiles => 0.539_956_8,
        }
    }

    /// Units per kilometer, in the precision of `T`.
    #[must_use]
    pub fn multiplier<T: RealField + Copy>(self) -> T {
        literal(self.per_kilometer())
    }
}

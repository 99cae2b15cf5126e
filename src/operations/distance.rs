use nalgebra::RealField;

use crate::math::Vector2;

/// Returns the planar distance between `(lat1, lon1)` and `(lat2, lon2)`.
///
/// Coordinate differences are scaled by `lat_factor` / `lon_factor` (units
/// per degree, see [`crate::scale_factors`]) and combined with the
/// Euclidean norm. This is exact in the linearized plane and a first-order
/// approximation of the ellipsoidal distance; the error is not bounded at
/// runtime.
#[must_use]
pub fn distance<T: RealField + Copy>(
    lat1: T,
    lon1: T,
    lat2: T,
    lon2: T,
    lat_factor: T,
    lon_factor: T,
) -> T {
    let dy = (lat2 - lat1) * lat_factor;
    let dx = (lon2 - lon1) * lon_factor;
    Vector2::new(dx, dy).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coordinate, Unit};
    use crate::operations::{scale_factors, ScaleFactors};
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn sample_points() -> Vec<Coordinate<f64>> {
        vec![
            Coordinate::new(40.7128, -74.006),
            Coordinate::new(40.7306, -73.9352),
            Coordinate::new(40.6413, -73.7781),
            Coordinate::new(40.7580, -73.9855),
            Coordinate::new(40.7128, -74.006),
        ]
    }

    #[test]
    fn pure_north_south() {
        let f = scale_factors(0.0_f64, 1.0);
        let d = distance(0.0, 0.0, 1.0, 0.0, f.lat, f.lon);
        assert!((d - f.lat).abs() < TOL, "d={d}");
    }

    #[test]
    fn pure_east_west() {
        let f = scale_factors(0.0_f64, 1.0);
        let d = distance(0.0, 0.0, 0.0, 2.0, f.lat, f.lon);
        assert!((d - 2.0 * f.lon).abs() < TOL, "d={d}");
    }

    #[test]
    fn right_triangle() {
        // Legs of 3 and 4 units with unit factors.
        let d = distance(0.0_f64, 0.0, 3.0, 4.0, 1.0, 1.0);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn identity_is_zero() {
        let f = ScaleFactors::for_unit(40.7_f64, Unit::Meters);
        for p in sample_points() {
            assert_eq!(f.distance(&p, &p), 0.0);
        }
    }

    #[test]
    fn symmetric_and_non_negative() {
        let f = ScaleFactors::for_unit(40.7_f64, Unit::Meters);
        let points = sample_points();
        for a in &points {
            for b in &points {
                let ab = f.distance(a, b);
                let ba = f.distance(b, a);
                assert_eq!(ab.to_bits(), ba.to_bits(), "{a:?} {b:?}");
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn short_city_hop_is_close_to_geodesic() {
        // Manhattan (40.7580, -73.9855) to JFK (40.6413, -73.7781):
        // the WGS84 geodesic is about 21.8 km.
        let f = ScaleFactors::for_unit(40.7_f64, Unit::Kilometers);
        let d = f.distance(
            &Coordinate::new(40.7580, -73.9855),
            &Coordinate::new(40.6413, -73.7781),
        );
        assert!((d - 21.8).abs() < 0.05, "d={d}");
    }

    #[test]
    fn unit_conversion_is_proportional() {
        let a = Coordinate::new(51.5_f64, -0.12);
        let b = Coordinate::new(51.75, 0.3);
        let km = ScaleFactors::for_unit(51.6_f64, Unit::Kilometers).distance(&a, &b);
        let m = ScaleFactors::for_unit(51.6_f64, Unit::Meters).distance(&a, &b);
        assert_relative_eq!(m, km * 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn nan_coordinate_propagates() {
        let d = distance(f64::NAN, 0.0, 1.0, 1.0, 111.0, 111.0);
        assert!(d.is_nan());
    }

    #[test]
    fn single_precision_agrees_with_double() {
        let single = scale_factors(10.0_f32, 1.0);
        let double = scale_factors(10.0_f64, 1.0);
        let ds = distance(10.0_f32, 20.0, 10.5, 20.25, single.lat, single.lon);
        let dd = distance(10.0_f64, 20.0, 10.5, 20.25, double.lat, double.lon);
        assert_relative_eq!(f64::from(ds), dd, max_relative = 2e-6);
    }
}

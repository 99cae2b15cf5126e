use nalgebra::RealField;

use crate::error::{PathError, Result};
use crate::geometry::Coordinate;

use super::distance;

/// Returns the length of the polyline through `points`.
///
/// The length is the sum of the planar [`distance`] between each pair of
/// consecutive points. A single point has length zero. The terms are
/// independent of each other, so the loop is free to be vectorized.
///
/// # Errors
///
/// Returns [`PathError::Empty`] if `points` is empty.
pub fn path_length<T: RealField + Copy>(
    points: &[Coordinate<T>],
    lat_factor: T,
    lon_factor: T,
) -> Result<T> {
    if points.is_empty() {
        tracing::debug!("path length requested for an empty path");
        return Err(PathError::Empty.into());
    }

    Ok(points
        .iter()
        .zip(&points[1..])
        .fold(nalgebra::zero(), |acc, (a, b)| {
            acc + distance(a.lat, a.lon, b.lat, b.lon, lat_factor, lon_factor)
        }))
}

/// Returns the length of the polyline given as parallel latitude and
/// longitude slices.
///
/// Behaves like [`path_length`] with `lats[i]` / `lons[i]` as the i-th point.
///
/// # Errors
///
/// Returns [`PathError::LengthMismatch`] if the slices differ in length, and
/// [`PathError::Empty`] if they are empty.
pub fn path_length_split<T: RealField + Copy>(
    lats: &[T],
    lons: &[T],
    lat_factor: T,
    lon_factor: T,
) -> Result<T> {
    if lats.len() != lons.len() {
        tracing::debug!(
            lats = lats.len(),
            lons = lons.len(),
            "latitude and longitude sequences differ in length"
        );
        return Err(PathError::LengthMismatch {
            lats: lats.len(),
            lons: lons.len(),
        }
        .into());
    }
    if lats.is_empty() {
        tracing::debug!("path length requested for an empty path");
        return Err(PathError::Empty.into());
    }

    let heads = lats.iter().zip(lons);
    let tails = lats[1..].iter().zip(&lons[1..]);
    Ok(heads
        .zip(tails)
        .fold(nalgebra::zero(), |acc, ((&lat1, &lon1), (&lat2, &lon2))| {
            acc + distance(lat1, lon1, lat2, lon2, lat_factor, lon_factor)
        }))
}

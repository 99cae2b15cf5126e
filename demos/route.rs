//! Route length demo.
//!
//! Usage:
//! ```text
//! cargo run --example route                       # kilometers
//! RUST_LOG=flatgeo=trace cargo run --example route  # show derived factors
//! ```

use flatgeo::{path_length_split, Coordinate, Real, Result, ScaleFactors, Unit};

/// A walk around lower Manhattan.
const ROUTE: [(Real, Real); 5] = [
    (40.7128, -74.0060),
    (40.7061, -74.0088),
    (40.7033, -74.0170),
    (40.7115, -74.0125),
    (40.7128, -74.0060),
];

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and flatgeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=flatgeo=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("route=info".parse().unwrap_or_default())
        .add_directive("flatgeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let points: Vec<Coordinate> = ROUTE.iter().copied().map(Coordinate::from).collect();
    let (south, north) = points
        .iter()
        .fold((Real::MAX, Real::MIN), |(lo, hi), p| (lo.min(p.lat), hi.max(p.lat)));
    let reference_lat = (south + north) / 2.0;

    for unit in Unit::ALL {
        let factors = ScaleFactors::for_unit(reference_lat, unit);
        let total = factors.path_length(&points)?;
        tracing::info!(?unit, total, "route length");
    }

    let lats: Vec<Real> = points.iter().map(|p| p.lat).collect();
    let lons: Vec<Real> = points.iter().map(|p| p.lon).collect();
    let factors = ScaleFactors::for_unit(reference_lat, Unit::Meters);
    let total = path_length_split(&lats, &lons, factors.lat, factors.lon)?;
    tracing::info!(total, "route length in meters from split sequences");

    Ok(())
}

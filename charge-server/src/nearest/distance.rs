//! Geodesic distance between coordinates.

use geo::{GeodesicDistance, Point};

use crate::domain::GeoCoordinate;

/// Distance in kilometres along the WGS84 ellipsoid.
///
/// Uses Karney's geodesic algorithm, which is accurate to a few nanometres
/// and converges for every pair of points including near-antipodal ones.
/// Identical points are exactly `0.0` apart. Because `GeoCoordinate`
/// stores each physical point one way, that includes the poles at any
/// longitude and the antimeridian written as -180 or 180.
pub fn geodesic_distance_km(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    // geo points are (x, y) = (longitude, latitude)
    let from = Point::new(a.longitude(), a.latitude());
    let to = Point::new(b.longitude(), b.latitude());
    from.geodesic_distance(&to) / 1000.0
}

//! Linear nearest-station search.

use tracing::debug;

use crate::domain::{GeoCoordinate, InvalidCoordinate, Station};

use super::distance::geodesic_distance_km;

/// Error from a nearest-station query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NearestError {
    /// The user's position could not be parsed or is out of range
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    /// There were no stations to choose from
    #[error("no charging stations available")]
    EmptyStationSet,
}

/// Outcome of a nearest-station query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult<'a> {
    /// The closest station
    pub station: &'a Station,

    /// Geodesic distance from the query point, in kilometres
    pub distance_km: f64,
}

/// Find the station closest to `user`.
///
/// Stations are scanned in order and the first one at the minimum distance
/// wins, so ties always resolve to the earliest entry.
///
/// # Examples
///
/// ```
/// use charge_server::domain::{GeoCoordinate, Station, StationId};
/// use charge_server::nearest::find_nearest;
///
/// let at = |lat, lon| GeoCoordinate::new(lat, lon).unwrap();
/// let stations = vec![
///     Station::new(StationId::new("a"), at(40.0, -73.0)),
///     Station::new(StationId::new("b"), at(41.0, -74.0)),
/// ];
///
/// let nearest = find_nearest(at(40.9, -73.9), &stations).unwrap();
/// assert_eq!(nearest.station.id.as_str(), "b");
/// ```
pub fn find_nearest(
    user: GeoCoordinate,
    stations: &[Station],
) -> Result<DistanceResult<'_>, NearestError> {
    find_nearest_by(user, stations, geodesic_distance_km)
}

/// Parse raw latitude/longitude text, then find the nearest station.
pub fn find_nearest_from_params<'a>(
    latitude: &str,
    longitude: &str,
    stations: &'a [Station],
) -> Result<DistanceResult<'a>, NearestError> {
    let user = GeoCoordinate::parse(latitude, longitude)?;
    find_nearest(user, stations)
}

/// Find the station closest to `user` under an arbitrary distance function.
///
/// `distance` is called once per station as `distance(user, station)`.
pub fn find_nearest_by<F>(
    user: GeoCoordinate,
    stations: &[Station],
    distance: F,
) -> Result<DistanceResult<'_>, NearestError>
where
    F: Fn(GeoCoordinate, GeoCoordinate) -> f64,
{
    let (first, rest) = stations.split_first().ok_or(NearestError::EmptyStationSet)?;

    let mut best = DistanceResult {
        station: first,
        distance_km: distance(user, first.location),
    };

    for station in rest {
        let d = distance(user, station.location);
        if d < best.distance_km {
            best = DistanceResult {
                station,
                distance_km: d,
            };
        }
    }

    debug!(
        user = %user,
        candidates = stations.len(),
        station = %best.station.id,
        distance_km = best.distance_km,
        "nearest station found"
    );

    Ok(best)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationId;
    use proptest::prelude::*;

    fn any_coord() -> impl Strategy<Value = GeoCoordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| GeoCoordinate::new(lat, lon).unwrap())
    }

    fn station_set() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec(any_coord(), 1..100).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, c)| Station::new(StationId::positional(i), c))
                .collect()
        })
    }

    proptest! {
        /// The reported distance is the minimum over all stations
        #[test]
        fn distance_is_minimum(user in any_coord(), stations in station_set()) {
            let result = find_nearest(user, &stations).unwrap();
            let min = stations
                .iter()
                .map(|s| geodesic_distance_km(user, s.location))
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(result.distance_km, min);
        }

        /// The returned station is the first one at the minimum distance
        #[test]
        fn station_is_first_at_minimum(user in any_coord(), stations in station_set()) {
            let result = find_nearest(user, &stations).unwrap();
            let first_at_min = stations
                .iter()
                .position(|s| geodesic_distance_km(user, s.location) == result.distance_km)
                .unwrap();
            prop_assert_eq!(result.station, &stations[first_at_min]);
        }
    }
}

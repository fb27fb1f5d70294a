//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::nearest::DistanceResult;

/// Query parameters for the nearest-station lookup.
///
/// Both fields are kept as raw text so that missing and malformed values
/// reach the coordinate parser and produce the same error.
#[derive(Debug, Default, Deserialize)]
pub struct NearestRequest {
    /// Latitude in decimal degrees
    pub latitude: Option<String>,

    /// Longitude in decimal degrees
    pub longitude: Option<String>,
}

/// Response for the nearest-station lookup.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    /// Station position as `[latitude, longitude]`
    pub coordinates: [f64; 2],

    /// Distance from the query point in kilometres
    pub distance: f64,
}

/// A station in listing responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Station position as `[latitude, longitude]`
    pub coordinates: [f64; 2],
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<DistanceResult<'_>> for NearestResponse {
    fn from(result: DistanceResult<'_>) -> Self {
        Self {
            coordinates: result.station.location.as_pair(),
            distance: result.distance_km,
        }
    }
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            coordinates: station.location.as_pair(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoCoordinate, StationId};

    fn station() -> Station {
        Station::new(
            StationId::new("ny-1"),
            GeoCoordinate::new(40.75, -73.99).unwrap(),
        )
    }

    #[test]
    fn nearest_response_shape() {
        let station = station();
        let result = DistanceResult {
            station: &station,
            distance_km: 1.5,
        };

        let json = serde_json::to_value(NearestResponse::from(result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "coordinates": [40.75, -73.99], "distance": 1.5 })
        );
    }

    #[test]
    fn station_result_omits_missing_name() {
        let json = serde_json::to_value(StationResult::from_station(&station())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "ny-1", "coordinates": [40.75, -73.99] })
        );
    }

    #[test]
    fn station_result_includes_name() {
        let named = station().with_name("Midtown Garage");
        let result = StationResult::from_station(&named);
        assert_eq!(result.name.as_deref(), Some("Midtown Garage"));
    }
}

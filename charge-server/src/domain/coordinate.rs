//! Geographic coordinate types.

use std::fmt;

/// Error returned when a latitude/longitude pair cannot be accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: String,
}

impl InvalidCoordinate {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A point on the Earth's surface in decimal degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within `(-180, 180]`,
/// and both are finite. This type guarantees that any `GeoCoordinate` value
/// is valid by construction.
///
/// Each physical point has exactly one representation: a longitude of -180
/// is stored as 180, and the poles always carry longitude 0.
///
/// # Examples
///
/// ```
/// use charge_server::domain::GeoCoordinate;
///
/// let nyc = GeoCoordinate::new(40.7128, -74.0060).unwrap();
/// assert_eq!(nyc.latitude(), 40.7128);
///
/// // Out of range is rejected
/// assert!(GeoCoordinate::new(200.0, 0.0).is_err());
///
/// // Query parameters are parsed and validated in one step
/// assert!(GeoCoordinate::parse("40.0", "-73.0").is_ok());
/// assert!(GeoCoordinate::parse("", "-73.0").is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate from numeric degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() {
            return Err(InvalidCoordinate::new("latitude must be a finite number"));
        }
        if !longitude.is_finite() {
            return Err(InvalidCoordinate::new("longitude must be a finite number"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::new(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::new(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }

        let longitude = if latitude.abs() == 90.0 {
            0.0
        } else if longitude == -180.0 {
            180.0
        } else {
            longitude
        };

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a coordinate from raw text such as query parameters.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a
    /// finite decimal number is rejected.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InvalidCoordinate> {
        let lat = parse_degrees("latitude", latitude)?;
        let lon = parse_degrees("longitude", longitude)?;
        Self::new(lat, lon)
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The coordinate as a `[latitude, longitude]` pair.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, InvalidCoordinate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidCoordinate::new(format!("{field} is missing")));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| InvalidCoordinate::new(format!("{field} {raw:?} is not a number")))
}

impl fmt::Debug for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoCoordinate({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

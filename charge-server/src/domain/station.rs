//! Charging station types.

use std::fmt;

use super::GeoCoordinate;

/// Opaque identifier for a charging station.
///
/// Station records are not required to carry an id; the loader then
/// falls back to a positional id (see [`StationId::positional`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Create an id from an explicit value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id derived from a record's position in its source.
    pub fn positional(index: usize) -> Self {
        Self(format!("station-{index}"))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A charging station location.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,

    /// Display name, when the source provides one
    pub name: Option<String>,

    pub location: GeoCoordinate,
}

impl Station {
    /// Create a station without a display name.
    pub fn new(id: StationId, location: GeoCoordinate) -> Self {
        Self {
            id,
            name: None,
            location,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_id() {
        assert_eq!(StationId::positional(0).as_str(), "station-0");
        assert_eq!(StationId::positional(42).to_string(), "station-42");
    }

    #[test]
    fn debug_id() {
        assert_eq!(format!("{:?}", StationId::new("ny-1")), "StationId(ny-1)");
    }

    #[test]
    fn with_name() {
        let loc = GeoCoordinate::new(40.0, -73.0).unwrap();
        let station = Station::new(StationId::new("a"), loc).with_name("Depot");
        assert_eq!(station.name.as_deref(), Some("Depot"));
        assert_eq!(station.location, loc);
    }
}

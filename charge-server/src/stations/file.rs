//! JSON station file loading.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::{GeoCoordinate, Station, StationId};

use super::error::StationError;

/// A station record as stored on disk.
///
/// Only the coordinates are required; records without an id get a
/// positional one.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    pub latitude: f64,
    pub longitude: f64,
}

/// Load stations from a JSON file containing an array of [`StationRecord`]s.
///
/// Records with out-of-range coordinates are skipped with a warning; file
/// order is preserved for the rest.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, StationError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|source| StationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<StationRecord> =
        serde_json::from_str(&json).map_err(|e| StationError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(build_stations(records))
}

/// Convert raw records into validated stations.
pub(crate) fn build_stations(records: Vec<StationRecord>) -> Vec<Station> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let location = match GeoCoordinate::new(record.latitude, record.longitude) {
                Ok(location) => location,
                Err(e) => {
                    warn!(index, error = %e, "skipping station record");
                    return None;
                }
            };

            let id = record
                .id
                .map(StationId::new)
                .unwrap_or_else(|| StationId::positional(index));

            Some(Station {
                id,
                name: record.name,
                location,
            })
        })
        .collect()
}

//! Application state for the web layer.

use crate::stations::StationStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Charging stations available to list and search
    pub stations: StationStore,

    /// Maximum number of stations per listing or search
    pub station_limit: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationStore, station_limit: usize) -> Self {
        Self {
            stations,
            station_limit,
        }
    }
}

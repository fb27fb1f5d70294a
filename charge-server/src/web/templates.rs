//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Station;

/// Home page listing station coordinates.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationView>,
}

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub id: String,
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationView {
    /// Name to show, falling back to the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            latitude: station.location.latitude(),
            longitude: station.location.longitude(),
        }
    }
}

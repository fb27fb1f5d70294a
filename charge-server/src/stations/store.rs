//! Shared in-memory station store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Station;

use super::error::StationError;
use super::file::load_stations;

/// Thread-safe station list with support for background reload.
///
/// Cloning is cheap and every clone sees the same stations. Readers take
/// a snapshot and never hold the lock while searching.
#[derive(Clone)]
pub struct StationStore {
    inner: Arc<RwLock<Vec<Station>>>,
    source: Option<PathBuf>,
}

impl StationStore {
    /// Create a store by loading the given station file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let stations = load_stations(path)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(stations)),
            source: Some(path.to_path_buf()),
        })
    }

    /// Create a store from stations already in memory.
    ///
    /// Such a store cannot be reloaded.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(stations)),
            source: None,
        }
    }

    /// The first `limit` stations, in store order.
    pub async fn snapshot(&self, limit: usize) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.iter().take(limit).cloned().collect()
    }

    /// Get the number of stations in the store.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Path the store was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Reload the stations from the backing file.
    ///
    /// On success, replaces the current list. On failure, the existing
    /// list is preserved and the error is returned.
    pub async fn reload(&self) -> Result<usize, StationError> {
        let path = self.source.as_ref().ok_or(StationError::NoSource)?;
        let stations = load_stations(path)?;
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = stations;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoCoordinate, StationId};
    use tempfile::tempdir;

    fn station(id: &str, lat: f64, lon: f64) -> Station {
        Station::new(StationId::new(id), GeoCoordinate::new(lat, lon).unwrap())
    }

    #[tokio::test]
    async fn snapshot_respects_limit_and_order() {
        let stations = (0..150)
            .map(|i| station(&format!("s{i}"), 0.0, i as f64 / 10.0))
            .collect();
        let store = StationStore::from_stations(stations);

        let snapshot = store.snapshot(100).await;
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot[0].id.as_str(), "s0");
        assert_eq!(snapshot[99].id.as_str(), "s99");
        assert_eq!(store.len().await, 150);
    }

    #[tokio::test]
    async fn snapshot_smaller_than_limit() {
        let store = StationStore::from_stations(vec![station("a", 1.0, 1.0)]);
        assert_eq!(store.snapshot(100).await.len(), 1);
    }

    #[tokio::test]
    async fn empty_store() {
        let store = StationStore::from_stations(Vec::new());
        assert!(store.is_empty().await);
        assert!(store.snapshot(100).await.is_empty());
    }

    #[tokio::test]
    async fn reload_without_source_fails() {
        let store = StationStore::from_stations(Vec::new());
        let err = store.reload().await.unwrap_err();
        assert!(matches!(err, StationError::NoSource));
    }

    #[tokio::test]
    async fn reload_picks_up_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"[{"latitude": 1.0, "longitude": 1.0}]"#).unwrap();

        let store = StationStore::load(&path).unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.source(), Some(path.as_path()));

        std::fs::write(
            &path,
            r#"[{"latitude": 1.0, "longitude": 1.0}, {"latitude": 2.0, "longitude": 2.0}]"#,
        )
        .unwrap();

        assert_eq!(store.reload().await.unwrap(), 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn failed_reload_keeps_existing_stations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"[{"id": "keep", "latitude": 1.0, "longitude": 1.0}]"#).unwrap();

        let store = StationStore::load(&path).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert!(store.reload().await.is_err());
        let snapshot = store.snapshot(10).await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id.as_str(), "keep");
    }

    #[tokio::test]
    async fn clones_share_stations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, "[]").unwrap();

        let store = StationStore::load(&path).unwrap();
        let clone = store.clone();

        std::fs::write(&path, r#"[{"latitude": 3.0, "longitude": 3.0}]"#).unwrap();
        clone.reload().await.unwrap();

        assert_eq!(store.len().await, 1);
    }
}

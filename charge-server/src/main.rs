use std::error::Error;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use charge_server::config::ServerConfig;
use charge_server::stations::StationStore;
use charge_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load stations (fail fast if the file is unusable)
    let store = StationStore::load(&config.stations_file)?;
    let count = store.len().await;
    info!(
        count,
        path = %config.stations_file.display(),
        "loaded charging stations"
    );
    if store.is_empty().await {
        warn!("station file has no usable records; /nearest will return 404");
    }

    if let Some(interval) = config.reload_interval {
        spawn_reload(store.clone(), interval);
    }

    let state = AppState::new(store, config.station_limit);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        routes = "GET /, GET /nearest?latitude=&longitude=, GET /api/stations, GET /health",
        "EV charging station finder listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Periodically reload the station file in the background.
fn spawn_reload(store: StationStore, period: Duration) {
    let path = store
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    info!(
        path = %path,
        every_secs = period.as_secs(),
        "reloading charging stations periodically"
    );

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match store.reload().await {
                Ok(count) => info!(count, path = %path, "reloaded charging stations"),
                Err(e) => error!(error = %e, path = %path, "failed to reload charging stations"),
            }
        }
    });
}

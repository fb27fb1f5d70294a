//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {name}: {reason}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the charging station server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// JSON file holding the station records.
    pub stations_file: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Maximum number of stations listed or searched per request.
    pub station_limit: usize,

    /// How often to reload the station file, if at all.
    pub reload_interval: Option<Duration>,
}

impl ServerConfig {
    pub const BIND_ADDR: &'static str = "CHARGE_BIND_ADDR";
    pub const STATIONS_FILE: &'static str = "CHARGE_STATIONS_FILE";
    pub const STATIC_DIR: &'static str = "CHARGE_STATIC_DIR";
    pub const STATION_LIMIT: &'static str = "CHARGE_STATION_LIMIT";
    pub const RELOAD_SECS: &'static str = "CHARGE_RELOAD_SECS";

    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(Self::BIND_ADDR) {
            config.bind_addr = parse(Self::BIND_ADDR, &value)?;
        }
        if let Some(value) = get(Self::STATIONS_FILE) {
            config.stations_file = PathBuf::from(value);
        }
        if let Some(value) = get(Self::STATIC_DIR) {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = get(Self::STATION_LIMIT) {
            let limit: usize = parse(Self::STATION_LIMIT, &value)?;
            if limit == 0 {
                return Err(ConfigError {
                    name: Self::STATION_LIMIT,
                    value,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.station_limit = limit;
        }
        if let Some(value) = get(Self::RELOAD_SECS) {
            let secs: u64 = parse(Self::RELOAD_SECS, &value)?;
            // 0 disables reloading
            config.reload_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            stations_file: PathBuf::from("data/stations.json"),
            static_dir: PathBuf::from("static"),
            station_limit: 100,
            reload_interval: None,
        }
    }
}

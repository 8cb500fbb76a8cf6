//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::sessions::SessionStoreConfig;

/// Directory holding `stations.json`, `edges.json` and `fares.json`.
pub const DATA_DIR_VAR: &str = "TRANSIT_DATA_DIR";
/// Address to listen on.
pub const ADDR_VAR: &str = "TRANSIT_ADDR";
/// Minutes before an idle rider's session is dropped.
pub const SESSION_IDLE_VAR: &str = "TRANSIT_SESSION_IDLE_MINS";

/// Error for an environment variable that is set but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub addr: SocketAddr,
    pub sessions: SessionStoreConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(addr) = lookup(ADDR_VAR) {
            config.addr = addr.parse().map_err(|_| ConfigError {
                key: ADDR_VAR,
                value: addr.clone(),
            })?;
        }

        if let Some(mins) = lookup(SESSION_IDLE_VAR) {
            let parsed: u64 = mins.trim().parse().map_err(|_| ConfigError {
                key: SESSION_IDLE_VAR,
                value: mins.clone(),
            })?;
            config.sessions.time_to_idle = Duration::from_secs(parsed * 60);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            sessions: SessionStoreConfig::default(),
        }
    }
}

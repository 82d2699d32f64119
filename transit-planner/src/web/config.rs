//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the dataset file.
pub const DATA_ENV: &str = "TRANSIT_DATA";

/// Environment variable naming the bind address.
pub const ADDR_ENV: &str = "TRANSIT_ADDR";

const DEFAULT_DATA: &str = "data/stops.json";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Where to find the dataset and where to listen.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_path = get(DATA_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));

        let addr_text = get(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value: addr_text.clone(),
                source,
            })?;

        Ok(Self { data_path, addr })
    }
}

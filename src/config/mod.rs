//! Runtime configuration read from the environment (and `.env`, when present).
//!
//! | Variable                   | Default     |
//! |----------------------------|-------------|
//! | `HOST`                     | `0.0.0.0`   |
//! | `PORT`                     | `3000`      |
//! | `STORAGE_MODE`             | `in_memory` |
//! | `POSTGRESQL_URL`           | required for `postgres` |
//! | `DATABASE_MAX_CONNECTIONS` | `10`        |
//! | `LOG_LEVEL`                | `info`      |

mod errors;

use std::net::SocketAddr;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

pub use errors::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StorageMode {
    InMemory,
    Postgres
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "in_memory" | "memory" => Ok(StorageMode::InMemory),
            "postgres" | "postgresql" => Ok(StorageMode::Postgres),
            _ => Err(ConfigError::invalid("STORAGE_MODE", value))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub address: SocketAddr,
    pub storage_mode: StorageMode,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub log_level: LevelFilter
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| ConfigError::invalid("PORT", &port))?,
            None => DEFAULT_PORT
        };

        let address = format!("{host}:{port}").parse::<SocketAddr>()
            .map_err(|_| ConfigError::invalid("HOST", &host))?;

        let storage_mode = match read("STORAGE_MODE") {
            Some(mode) => mode.parse()?,
            None => StorageMode::InMemory
        };

        let database_url = read("POSTGRESQL_URL");

        if storage_mode == StorageMode::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("POSTGRESQL_URL"));
        }

        let max_connections = match read("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(connections) if connections > 0 => connections,
                _ => return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", &value))
            },
            None => DEFAULT_MAX_CONNECTIONS
        };

        let log_level = match read("LOG_LEVEL") {
            Some(level) => parse_log_level(&level)?,
            None => LevelFilter::INFO
        };

        Ok(Self {
            address,
            storage_mode,
            database_url,
            max_connections,
            log_level
        })
    }
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(ConfigError::invalid("LOG_LEVEL", level))
    }
}

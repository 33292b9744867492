//! Configuration loading from the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var} ({value:?}): {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Postgres connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Service configuration.
///
/// Without `DATABASE_URL` the service runs against the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Read `BIND_ADDR`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_ACQUIRE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or("BIND_ADDR", &lookup, || {
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        })?;

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let max_connections =
                    parse_or("DATABASE_MAX_CONNECTIONS", &lookup, || DEFAULT_MAX_CONNECTIONS)?;
                if max_connections == 0 {
                    return Err(ConfigError::Invalid {
                        var: "DATABASE_MAX_CONNECTIONS",
                        value: max_connections.to_string(),
                        reason: "must be at least 1".to_string(),
                    });
                }
                let timeout_secs = parse_or("DATABASE_ACQUIRE_TIMEOUT_SECS", &lookup, || {
                    DEFAULT_ACQUIRE_TIMEOUT_SECS
                })?;

                Some(DatabaseConfig {
                    url,
                    max_connections,
                    acquire_timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Self {
            bind_addr,
            database,
        })
    }
}

fn parse_or<T, F, D>(var: &'static str, lookup: &F, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default()),
    }
}

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tickyard_core::{DEFAULT_PREDICTION_URL, DEFAULT_YAHOO_BASE_URL};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub yahoo_base_url: String,
    pub prediction_url: String,
    pub upstream_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_owned(),
            prediction_url: DEFAULT_PREDICTION_URL.to_owned(),
            upstream_timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let upstream_timeout_ms = parse_or(
            "UPSTREAM_TIMEOUT_MS",
            var("UPSTREAM_TIMEOUT_MS"),
            DEFAULT_UPSTREAM_TIMEOUT_MS,
        )?;
        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        Ok(Self {
            bind_addr,
            port,
            yahoo_base_url: var("YAHOO_CHART_BASE_URL")
                .unwrap_or_else(|| DEFAULT_YAHOO_BASE_URL.to_owned()),
            prediction_url: var("PREDICTION_SERVICE_URL")
                .or_else(|| var("FASTAPI_URL"))
                .unwrap_or_else(|| DEFAULT_PREDICTION_URL.to_owned()),
            upstream_timeout_ms,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

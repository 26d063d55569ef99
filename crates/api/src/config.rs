//! Runtime configuration, read once at startup from the environment.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "CUSTOMER_API_ADDR";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(ADDR_ENV).unwrap_or_else(|| {
            tracing::warn!("{ADDR_ENV} not set; listening on {DEFAULT_ADDR}");
            DEFAULT_ADDR.to_string()
        });

        let addr = raw.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_ENV,
            value: raw.clone(),
        })?;

        Ok(Self { addr })
    }
}

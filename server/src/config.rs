//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site_root` that `/pkg` is served from.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default from Leptos configuration
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidHost`] or [`ServerError::InvalidPort`]
    /// when a value is present but unparsable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match value("HOST") {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidHost { raw })?,
            None => DEFAULT_HOST,
        };
        let port = match value("PORT") {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidPort { raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = value("SITE_ROOT").map(PathBuf::from);

        Ok(Self { host, port, site_root })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Base URL of the voting backend, without a trailing slash.
    pub upstream_api_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl Config {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `UPSTREAM_API_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `UPSTREAM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream_api_url = lookup("UPSTREAM_API_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing { var: "UPSTREAM_API_URL" })?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let raw_bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: raw_bind.clone() })?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_secs(
                "UPSTREAM_REQUEST_TIMEOUT_SECS",
                lookup("UPSTREAM_REQUEST_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_secs(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                lookup("UPSTREAM_CONNECT_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { bind_addr, port, upstream_api_url, timeouts })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

/// Timeout in whole seconds; zero would fail every upstream call.
fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match parse_or(var, raw.clone(), default)? {
        0 => Err(ConfigError::Invalid { var, value: raw.unwrap_or_default() }),
        secs => Ok(secs),
    }
}

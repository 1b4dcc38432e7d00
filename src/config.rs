//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: String, value: String },
    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidAddr { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolioConfig {
    pub addr: IpAddr,
    pub port: u16,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR, port: DEFAULT_PORT }
    }
}

impl FolioConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `FOLIO_ADDR`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars("FOLIO_ADDR", "PORT")
    }

    fn from_vars(addr_var: &str, port_var: &str) -> Result<Self, ConfigError> {
        let addr = parse_addr(addr_var, std::env::var(addr_var).ok().as_deref())?;
        let port = parse_port(port_var, std::env::var(port_var).ok().as_deref())?;
        Ok(Self { addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

fn parse_addr(var: &str, raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_ADDR),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidAddr { var: var.to_owned(), value: value.to_owned() }),
    }
}

fn parse_port(var: &str, raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { var: var.to_owned(), value: value.to_owned() }),
    }
}

//! Endpoint value objects

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::error::EndpointError;

/// Default read timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10;

/// Default listening address
pub const DEFAULT_ADDRESS: &str = "~/.copier.sock";

/// Supported listener kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkKind {
    /// Filesystem socket
    #[default]
    Unix,
    /// TCP port
    Tcp,
}

impl NetworkKind {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Tcp => "tcp",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unix" => Ok(Self::Unix),
            "tcp" => Ok(Self::Tcp),
            other => Err(EndpointError::UnsupportedNetwork(other.to_string())),
        }
    }
}

/// Endpoint configuration, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub network: NetworkKind,
    pub address: String,
    pub read_timeout: Duration,
}

impl EndpointConfig {
    /// Create an endpoint config, rejecting an empty address
    pub fn new(
        network: NetworkKind,
        address: impl Into<String>,
        read_timeout: Duration,
    ) -> Result<Self, EndpointError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(EndpointError::EmptyAddress);
        }
        Ok(Self {
            network,
            address,
            read_timeout,
        })
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            network: NetworkKind::Unix,
            address: DEFAULT_ADDRESS.to_string(),
            read_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// A validated endpoint that is ready to bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Absolute socket path (home shorthand already expanded)
    Unix(PathBuf),
    /// `host:port`
    Tcp(String),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(path) => write!(f, "{}", path.display()),
            Self::Tcp(addr) => write!(f, "{}", addr),
        }
    }
}

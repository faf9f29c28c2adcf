//! Application configuration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::endpoint::{EndpointConfig, NetworkKind, DEFAULT_ADDRESS, DEFAULT_TIMEOUT_MS};
use crate::domain::error::{ConfigError, EndpointError};
use crate::domain::session::ShutdownPolicy;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    /// Native clipboard through arboard
    #[default]
    Arboard,
    /// Pipe into `wl-copy` (Wayland)
    WlCopy,
}

impl ClipboardBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::WlCopy => "wl-copy",
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClipboardBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arboard" => Ok(Self::Arboard),
            "wl-copy" => Ok(Self::WlCopy),
            other => Err(ConfigError::ValidationError {
                key: "clipboard".to_string(),
                message: format!("\"{}\" is not one of: arboard, wl-copy", other),
            }),
        }
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub network: Option<String>,
    pub address: Option<String>,
    /// Read timeout in milliseconds
    pub timeout: Option<u64>,
    /// Drain period in milliseconds; 0 or unset means hard shutdown
    pub shutdown_grace: Option<u64>,
    pub clipboard: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            network: Some(NetworkKind::default().to_string()),
            address: Some(DEFAULT_ADDRESS.to_string()),
            timeout: Some(DEFAULT_TIMEOUT_MS),
            shutdown_grace: Some(0),
            clipboard: Some(ClipboardBackend::default().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            network: other.network.or(self.network),
            address: other.address.or(self.address),
            timeout: other.timeout.or(self.timeout),
            shutdown_grace: other.shutdown_grace.or(self.shutdown_grace),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Build the endpoint configuration.
    ///
    /// Fails on an unsupported network kind or an empty address.
    pub fn endpoint_config(&self) -> Result<EndpointConfig, EndpointError> {
        let network = match self.network.as_deref() {
            Some(s) => s.parse()?,
            None => NetworkKind::default(),
        };
        let address = self.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT_MS);

        EndpointConfig::new(network, address, Duration::from_millis(timeout))
    }

    /// Get the shutdown policy, hard if not set
    pub fn shutdown_policy(&self) -> ShutdownPolicy {
        ShutdownPolicy::from_grace_millis(self.shutdown_grace.unwrap_or(0))
    }

    /// Get the clipboard backend, arboard if not set
    pub fn clipboard_backend(&self) -> Result<ClipboardBackend, ConfigError> {
        match self.clipboard.as_deref() {
            Some(s) => s.parse(),
            None => Ok(ClipboardBackend::default()),
        }
    }
}

//! Domain error types

use thiserror::Error;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when an endpoint cannot be prepared for binding
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Unsupported network \"{0}\". Allowed networks are: unix, tcp")]
    UnsupportedNetwork(String),

    #[error("Endpoint address must not be empty")]
    EmptyAddress,

    #[error("Cannot expand \"{0}\": home directory is unavailable")]
    HomeDirUnavailable(String),

    #[error("Cannot expand \"{0}\": only \"~\" and \"~/\" refer to the home directory")]
    UnsupportedHomeShorthand(String),

    #[error("Failed to remove stale socket at {path}: {source}")]
    StaleEntry {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unix domain sockets are not supported on this platform")]
    UnixUnsupported,
}

/// Fatal startup error of the relay server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("Failed to listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

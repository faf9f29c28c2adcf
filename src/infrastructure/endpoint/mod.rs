//! Listening endpoints
//!
//! Provides platform-specific implementations:
//! - Unix (Linux/macOS): Unix Domain Sockets and TCP
//! - Other platforms: TCP only

mod tcp;
#[cfg(unix)]
mod unix_socket;

pub use tcp::TcpEndpoint;
#[cfg(unix)]
pub use unix_socket::{SocketPath, UnixSocketEndpoint};

use std::io;

use async_trait::async_trait;

use crate::application::ports::{BoxedConnection, ConnectionAcceptor};
use crate::domain::endpoint::{Endpoint, EndpointConfig, NetworkKind};
use crate::domain::error::EndpointError;

/// Validate an endpoint config and make the filesystem ready for binding.
///
/// For Unix sockets this expands `~`, sets an owner-only umask and removes
/// any stale entry at the path.
pub fn prepare_endpoint(config: &EndpointConfig) -> Result<Endpoint, EndpointError> {
    if config.address.trim().is_empty() {
        return Err(EndpointError::EmptyAddress);
    }

    match config.network {
        NetworkKind::Tcp => Ok(Endpoint::Tcp(config.address.clone())),
        NetworkKind::Unix => prepare_unix(&config.address),
    }
}

#[cfg(unix)]
fn prepare_unix(address: &str) -> Result<Endpoint, EndpointError> {
    let socket_path = SocketPath::expand(address)?;
    socket_path.prepare()?;
    Ok(Endpoint::Unix(socket_path.path().to_path_buf()))
}

#[cfg(not(unix))]
fn prepare_unix(_address: &str) -> Result<Endpoint, EndpointError> {
    Err(EndpointError::UnixUnsupported)
}

/// The live listener. Only one exists per process.
pub enum BoundEndpoint {
    #[cfg(unix)]
    Unix(UnixSocketEndpoint),
    Tcp(TcpEndpoint),
}

impl BoundEndpoint {
    /// Bind a prepared endpoint
    pub async fn bind(endpoint: &Endpoint) -> io::Result<Self> {
        match endpoint {
            #[cfg(unix)]
            Endpoint::Unix(path) => Ok(Self::Unix(UnixSocketEndpoint::bind(
                SocketPath::from_path(path.clone()),
            )?)),
            #[cfg(not(unix))]
            Endpoint::Unix(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                EndpointError::UnixUnsupported.to_string(),
            )),
            Endpoint::Tcp(addr) => Ok(Self::Tcp(TcpEndpoint::bind(addr).await?)),
        }
    }
}

#[async_trait]
impl ConnectionAcceptor for BoundEndpoint {
    async fn accept(&mut self) -> io::Result<BoxedConnection> {
        match self {
            #[cfg(unix)]
            Self::Unix(endpoint) => endpoint.accept().await,
            Self::Tcp(endpoint) => endpoint.accept().await,
        }
    }

    fn local_address(&self) -> String {
        match self {
            #[cfg(unix)]
            Self::Unix(endpoint) => endpoint.local_address(),
            Self::Tcp(endpoint) => endpoint.local_address(),
        }
    }
}

//! Unix Domain Socket endpoint
//!
//! Used on Linux and macOS.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nix::sys::stat::{umask, Mode};
use tokio::net::UnixListener;

use crate::application::ports::{BoxedConnection, ConnectionAcceptor};
use crate::domain::error::EndpointError;

/// Socket path resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Resolve an address, expanding a leading `~` to the home directory.
    ///
    /// `~user` forms are rejected rather than taken as a relative path.
    pub fn expand(address: &str) -> Result<Self, EndpointError> {
        let path = match address.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                let home = dirs::home_dir()
                    .ok_or_else(|| EndpointError::HomeDirUnavailable(address.to_string()))?;
                home.join(rest.trim_start_matches('/'))
            }
            Some(_) => {
                return Err(EndpointError::UnsupportedHomeShorthand(
                    address.to_string(),
                ))
            }
            None => PathBuf::from(address),
        };
        Ok(Self { path })
    }

    /// Use an already absolute path as-is
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    fn exists(&self) -> bool {
        self.path.symlink_metadata().is_ok()
    }

    /// Remove whatever is at the socket path (file, socket or empty
    /// directory). A non-empty directory is left in place and reported.
    pub fn cleanup(&self) -> io::Result<()> {
        let metadata = match self.path.symlink_metadata() {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        if metadata.is_dir() {
            std::fs::remove_dir(&self.path)
        } else {
            std::fs::remove_file(&self.path)
        }
    }

    /// Prepare for binding: owner-only umask, then stale entry removal
    pub fn prepare(&self) -> Result<(), EndpointError> {
        restrict_umask();
        self.cleanup().map_err(|source| EndpointError::StaleEntry {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Restrict newly created files (the socket included) to the owner.
/// The mask is process-wide.
fn restrict_umask() {
    umask(Mode::from_bits_truncate(0o077));
}

/// Bound Unix Domain Socket; removes its socket file when dropped
pub struct UnixSocketEndpoint {
    socket_path: SocketPath,
    listener: UnixListener,
}

impl UnixSocketEndpoint {
    /// Bind to a prepared socket path
    pub fn bind(socket_path: SocketPath) -> io::Result<Self> {
        let listener = UnixListener::bind(socket_path.path())?;
        Ok(Self {
            socket_path,
            listener,
        })
    }
}

impl Drop for UnixSocketEndpoint {
    fn drop(&mut self) {
        let _ = self.socket_path.cleanup();
    }
}

#[async_trait]
impl ConnectionAcceptor for UnixSocketEndpoint {
    async fn accept(&mut self) -> io::Result<BoxedConnection> {
        let (stream, _addr) = self.listener.accept().await?;
        Ok(Box::new(stream))
    }

    fn local_address(&self) -> String {
        self.socket_path.path().display().to_string()
    }
}

//! Connection acceptor port interface

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

/// A bidirectional byte stream accepted from a client
pub trait Connection: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> Connection for T {}

/// Boxed connection, independent of the transport kind
pub type BoxedConnection = Box<dyn Connection>;

/// Port for a bound listening endpoint
#[async_trait]
pub trait ConnectionAcceptor: Send {
    /// Wait for the next client connection
    async fn accept(&mut self) -> io::Result<BoxedConnection>;

    /// Human-readable address of the endpoint
    fn local_address(&self) -> String;
}

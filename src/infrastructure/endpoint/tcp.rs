//! TCP endpoint

use std::io;
use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::TcpListener;

use crate::application::ports::{BoxedConnection, ConnectionAcceptor};

/// Bound TCP listener
pub struct TcpEndpoint {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl TcpEndpoint {
    pub async fn bind(address: &str) -> io::Result<Self> {
        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Actual bound address (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

#[async_trait]
impl ConnectionAcceptor for TcpEndpoint {
    async fn accept(&mut self) -> io::Result<BoxedConnection> {
        let (stream, _peer) = self.listener.accept().await?;
        Ok(Box::new(stream))
    }

    fn local_address(&self) -> String {
        self.local_addr.to_string()
    }
}

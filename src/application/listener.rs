//! Accept loop for the bound endpoint

use std::io;

use crate::application::ports::ConnectionAcceptor;
use crate::application::relay::RelayHandler;
use crate::application::tracker::SessionTracker;

/// Accepts connections and dispatches each one to its own task.
pub struct ListenerLoop<A> {
    acceptor: A,
    handler: RelayHandler,
    tracker: SessionTracker,
}

impl<A: ConnectionAcceptor> ListenerLoop<A> {
    pub fn new(acceptor: A, handler: RelayHandler, tracker: SessionTracker) -> Self {
        Self {
            acceptor,
            handler,
            tracker,
        }
    }

    /// Accept until the endpoint fails.
    ///
    /// Sessions are fire-and-forget: the loop never waits on them. The only
    /// way out is an accept error, which is reported and returned. The
    /// acceptor is dropped (and the endpoint released) when this returns
    /// or when the future is dropped.
    pub async fn run(mut self) -> io::Error {
        loop {
            match self.acceptor.accept().await {
                Ok(stream) => {
                    let handler = self.handler.clone();
                    let guard = self.tracker.track();
                    tokio::spawn(async move {
                        handler.handle(stream).await;
                        drop(guard);
                    });
                }
                Err(e) => {
                    self.handler.diagnostics().error(&format!(
                        "accept failed on {}: {}",
                        self.acceptor.local_address(),
                        e
                    ));
                    return e;
                }
            }
        }
    }
}

//! Relay server lifecycle once the endpoint is bound

use std::future::Future;
use std::sync::Arc;

use crate::application::listener::ListenerLoop;
use crate::application::ports::{Clipboard, ConnectionAcceptor, Diagnostics};
use crate::application::relay::RelayHandler;
use crate::application::tracker::SessionTracker;
use crate::domain::endpoint::EndpointConfig;
use crate::domain::session::ShutdownPolicy;

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub endpoint: EndpointConfig,
    pub shutdown: ShutdownPolicy,
}

/// Runs the accept loop in the background until told to stop
pub struct RelayServer {
    config: ServerConfig,
    clipboard: Arc<dyn Clipboard>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl RelayServer {
    pub fn new(
        config: ServerConfig,
        clipboard: Arc<dyn Clipboard>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            config,
            clipboard,
            diagnostics,
        }
    }

    /// Serve `acceptor` until `shutdown` resolves.
    ///
    /// The listener runs as its own task. When `shutdown` resolves the task
    /// is stopped, which drops the acceptor and releases the endpoint. What
    /// happens to sessions still running depends on the shutdown policy.
    pub async fn serve<A, F>(self, acceptor: A, shutdown: F)
    where
        A: ConnectionAcceptor + 'static,
        F: Future<Output = ()>,
    {
        let tracker = SessionTracker::new();
        let handler = RelayHandler::new(
            self.clipboard,
            Arc::clone(&self.diagnostics),
            self.config.endpoint.read_timeout,
        );

        let listener = tokio::spawn(ListenerLoop::new(acceptor, handler, tracker.clone()).run());

        shutdown.await;

        listener.abort();
        // Cancellation is expected; the endpoint is gone either way
        if let Err(e) = listener.await {
            if e.is_panic() {
                self.diagnostics
                    .error(&format!("listener task panicked: {}", e));
            }
        }

        match self.config.shutdown {
            ShutdownPolicy::Hard => {
                let active = tracker.active();
                if active > 0 {
                    self.diagnostics
                        .warn(&format!("abandoning {} in-flight session(s)", active));
                }
            }
            ShutdownPolicy::Drain(grace) => {
                let active = tracker.active();
                if active == 0 {
                    return;
                }
                self.diagnostics.info(&format!(
                    "waiting up to {}ms for {} in-flight session(s)",
                    grace.as_millis(),
                    active
                ));
                if !tracker.drain(grace).await {
                    self.diagnostics.warn(&format!(
                        "grace period elapsed, abandoning {} session(s)",
                        tracker.active()
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::io::{duplex, AsyncWriteExt, DuplexStream};
    use tokio::sync::{mpsc, oneshot};

    use crate::application::ports::{BoxedConnection, ClipboardError};
    use crate::domain::endpoint::NetworkKind;

    #[derive(Default)]
    struct FakeClipboard {
        copies: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Clipboard for FakeClipboard {
        async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            self.copies.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDiagnostics {
        lines: Mutex<Vec<String>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn warn(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    /// Acceptor fed from a channel; reports when it is dropped
    struct ChannelAcceptor {
        incoming: mpsc::Receiver<DuplexStream>,
        dropped: Option<oneshot::Sender<()>>,
    }

    impl Drop for ChannelAcceptor {
        fn drop(&mut self) {
            if let Some(tx) = self.dropped.take() {
                let _ = tx.send(());
            }
        }
    }

    #[async_trait]
    impl ConnectionAcceptor for ChannelAcceptor {
        async fn accept(&mut self) -> io::Result<BoxedConnection> {
            match self.incoming.recv().await {
                Some(stream) => Ok(Box::new(stream)),
                None => Err(io::Error::new(io::ErrorKind::Other, "closed")),
            }
        }

        fn local_address(&self) -> String {
            "channel".to_string()
        }
    }

    fn server(
        policy: ShutdownPolicy,
        clipboard: &Arc<FakeClipboard>,
        diagnostics: &Arc<RecordingDiagnostics>,
    ) -> RelayServer {
        RelayServer::new(
            ServerConfig {
                endpoint: EndpointConfig {
                    network: NetworkKind::Tcp,
                    address: "channel".to_string(),
                    read_timeout: Duration::from_millis(200),
                },
                shutdown: policy,
            },
            clipboard.clone(),
            diagnostics.clone(),
        )
    }

    #[tokio::test]
    async fn shutdown_releases_acceptor() {
        let clipboard = Arc::new(FakeClipboard::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let (conn_tx, conn_rx) = mpsc::channel(4);
        let (dropped_tx, dropped_rx) = oneshot::channel();
        let acceptor = ChannelAcceptor {
            incoming: conn_rx,
            dropped: Some(dropped_tx),
        };

        let (mut client, server_side) = duplex(64);
        client.write_all(b"copied").await.unwrap();
        client.shutdown().await.unwrap();
        conn_tx.send(server_side).await.unwrap();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let serving = tokio::spawn(
            server(ShutdownPolicy::Hard, &clipboard, &diagnostics).serve(acceptor, async {
                let _ = stop_rx.await;
            }),
        );

        for _ in 0..100 {
            if !clipboard.copies.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(*clipboard.copies.lock().unwrap(), vec!["copied".to_string()]);

        stop_tx.send(()).unwrap();
        serving.await.unwrap();
        dropped_rx.await.expect("acceptor dropped on shutdown");
    }

    #[tokio::test]
    async fn drain_waits_for_in_flight_sessions() {
        let clipboard = Arc::new(FakeClipboard::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let (conn_tx, conn_rx) = mpsc::channel(4);
        let acceptor = ChannelAcceptor {
            incoming: conn_rx,
            dropped: None,
        };

        // Never closes; ends by the 200ms read timeout
        let (_idle_client, server_side) = duplex(64);
        conn_tx.send(server_side).await.unwrap();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let serving = tokio::spawn(
            server(
                ShutdownPolicy::Drain(Duration::from_secs(5)),
                &clipboard,
                &diagnostics,
            )
            .serve(acceptor, async {
                let _ = stop_rx.await;
            }),
        );

        tokio::time::sleep(Duration::from_millis(20)).await;
        stop_tx.send(()).unwrap();
        serving.await.unwrap();

        // The drained session finished and wrote to the clipboard
        assert_eq!(*clipboard.copies.lock().unwrap(), vec![String::new()]);
    }

    #[tokio::test]
    async fn hard_shutdown_abandons_in_flight_sessions() {
        let clipboard = Arc::new(FakeClipboard::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let (conn_tx, conn_rx) = mpsc::channel(4);
        let acceptor = ChannelAcceptor {
            incoming: conn_rx,
            dropped: None,
        };

        let (_idle_client, server_side) = duplex(64);
        conn_tx.send(server_side).await.unwrap();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let serving = tokio::spawn(
            server(ShutdownPolicy::Hard, &clipboard, &diagnostics).serve(acceptor, async {
                let _ = stop_rx.await;
            }),
        );

        tokio::time::sleep(Duration::from_millis(20)).await;
        stop_tx.send(()).unwrap();
        serving.await.unwrap();

        assert!(clipboard.copies.lock().unwrap().is_empty());
        assert!(diagnostics
            .lines
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.contains("abandoning 1 in-flight session(s)")));
    }

    /// Acceptor that blows up on first use
    struct PanickingAcceptor;

    #[async_trait]
    impl ConnectionAcceptor for PanickingAcceptor {
        async fn accept(&mut self) -> io::Result<BoxedConnection> {
            panic!("acceptor exploded");
        }

        fn local_address(&self) -> String {
            "panicking".to_string()
        }
    }

    #[tokio::test]
    async fn listener_panic_is_reported() {
        let clipboard = Arc::new(FakeClipboard::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());

        server(ShutdownPolicy::Hard, &clipboard, &diagnostics)
            .serve(
                PanickingAcceptor,
                tokio::time::sleep(Duration::from_millis(50)),
            )
            .await;

        let lines = diagnostics.lines.lock().unwrap();
        assert!(lines.iter().any(|l| l.starts_with("listener task panicked")));
    }

    #[tokio::test]
    async fn cancelled_listener_is_not_reported() {
        let clipboard = Arc::new(FakeClipboard::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let (_conn_tx, conn_rx) = mpsc::channel::<DuplexStream>(1);
        let acceptor = ChannelAcceptor {
            incoming: conn_rx,
            dropped: None,
        };

        server(ShutdownPolicy::Hard, &clipboard, &diagnostics)
            .serve(acceptor, tokio::time::sleep(Duration::from_millis(20)))
            .await;

        assert!(diagnostics.lines.lock().unwrap().is_empty());
    }
}

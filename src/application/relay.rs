//! Per-connection relay: read a payload, hand it to the clipboard

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{timeout_at, Instant};

use crate::application::ports::{Clipboard, Diagnostics};
use crate::domain::session::{ReadEnd, ReadOutcome};

const READ_CHUNK: usize = 8 * 1024;

/// Read everything the peer sends until it closes or `deadline` passes.
///
/// The deadline is not an error: whatever arrived before it is the payload.
pub async fn read_until_deadline<R>(reader: &mut R, deadline: Instant) -> ReadOutcome
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut data = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK];

    let ended_by = loop {
        match timeout_at(deadline, reader.read(&mut chunk)).await {
            Err(_elapsed) => break ReadEnd::Timeout,
            Ok(Ok(0)) => break ReadEnd::EndOfStream,
            Ok(Ok(n)) => data.extend_from_slice(&chunk[..n]),
            Ok(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
            Ok(Err(e)) => break ReadEnd::Failed(e),
        }
    };

    ReadOutcome { data, ended_by }
}

/// Handles accepted connections. Cheap to clone; one clone per session.
#[derive(Clone)]
pub struct RelayHandler {
    clipboard: Arc<dyn Clipboard>,
    diagnostics: Arc<dyn Diagnostics>,
    read_timeout: Duration,
}

impl RelayHandler {
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        diagnostics: Arc<dyn Diagnostics>,
        read_timeout: Duration,
    ) -> Self {
        Self {
            clipboard,
            diagnostics,
            read_timeout,
        }
    }

    pub fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        &self.diagnostics
    }

    /// Run one session to completion.
    ///
    /// Takes ownership of the stream; it is closed when this returns,
    /// whichever path is taken.
    pub async fn handle<S>(&self, mut stream: S)
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let deadline = Instant::now() + self.read_timeout;
        let outcome = read_until_deadline(&mut stream, deadline).await;

        if !outcome.ended_by.is_complete() {
            self.diagnostics
                .error(&format!("failed to read from socket: {}", outcome.ended_by));
            return;
        }

        let text = outcome.text();
        self.diagnostics.info(&format!(
            "received {:?} ({} bytes)",
            text,
            outcome.data.len()
        ));

        if let Err(e) = self.clipboard.copy(&text).await {
            self.diagnostics
                .error(&format!("failed to save to clipboard: {}", e));

            let reply = format!("{}\n", e);
            if let Err(e) = write_back(&mut stream, reply.as_bytes()).await {
                self.diagnostics
                    .error(&format!("failed to send error to client: {}", e));
            }
        }
    }
}

async fn write_back<W>(writer: &mut W, bytes: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(bytes).await?;
    writer.flush().await
}

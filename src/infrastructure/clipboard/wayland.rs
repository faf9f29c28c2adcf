//! Wayland clipboard adapter using wl-copy

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Wayland clipboard adapter using wl-copy
pub struct WaylandClipboard {
    program: String,
}

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self::with_program("wl-copy")
    }

    /// Use a different executable (tests, non-standard installs)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .arg("--type")
            .arg("text/plain")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::WlCopyNotFound
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        // Closing stdin tells wl-copy the payload is complete
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "{} exited with status: {}",
                self.program, status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_is_reported() {
        let clipboard = WaylandClipboard::with_program("copier-no-such-wl-copy");
        let err = clipboard.copy("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::WlCopyNotFound));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_program_is_reported() {
        let clipboard = WaylandClipboard::with_program("false");
        let err = clipboard.copy("text").await.unwrap_err();
        // Either the exit status or a broken pipe on stdin, depending on timing
        assert!(matches!(err, ClipboardError::CopyFailed(_)));
    }
}

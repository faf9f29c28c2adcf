//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (default)
//! or wl-copy on Wayland desktops.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use std::sync::Arc;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::config::ClipboardBackend;

/// Create the clipboard adapter for the configured backend
pub fn create_clipboard(backend: ClipboardBackend) -> Result<Arc<dyn Clipboard>, ClipboardError> {
    match backend {
        ClipboardBackend::Arboard => {
            let clipboard = ArboardClipboard::new().map_err(|e| {
                ClipboardError::ClipboardUnavailable(format!(
                    "failed to start clipboard thread: {}",
                    e
                ))
            })?;
            Ok(Arc::new(clipboard))
        }
        ClipboardBackend::WlCopy => Ok(Arc::new(WaylandClipboard::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_every_backend() {
        assert!(create_clipboard(ClipboardBackend::Arboard).is_ok());
        assert!(create_clipboard(ClipboardBackend::WlCopy).is_ok());
    }
}

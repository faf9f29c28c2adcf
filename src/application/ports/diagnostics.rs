//! Diagnostics port interface
//!
//! All operational output of the relay (banner, bind address, received
//! payloads, errors) goes through this port. Implementations must be safe
//! to call from many sessions at once.

use std::sync::Arc;

/// Port for operational messages
pub trait Diagnostics: Send + Sync {
    /// Informational message
    fn info(&self, message: &str);

    /// Something unexpected that does not stop the relay
    fn warn(&self, message: &str);

    /// A failure
    fn error(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn info(&self, message: &str) {
        self.as_ref().info(message)
    }

    fn warn(&self, message: &str) {
        self.as_ref().warn(message)
    }

    fn error(&self, message: &str) {
        self.as_ref().error(message)
    }
}

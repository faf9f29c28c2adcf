//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod acceptor;
pub mod clipboard;
pub mod config;
pub mod diagnostics;

// Re-export common types
pub use acceptor::{BoxedConnection, Connection, ConnectionAcceptor};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use diagnostics::Diagnostics;

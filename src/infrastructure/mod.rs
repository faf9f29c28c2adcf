//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! listening endpoints, clipboard backends and the config file store.

pub mod clipboard;
pub mod config;
pub mod endpoint;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use endpoint::{prepare_endpoint, BoundEndpoint, TcpEndpoint};

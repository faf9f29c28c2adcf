//! Application layer - Relay use cases and port interfaces
//!
//! Contains the accept loop, the per-connection relay and the
//! trait definitions for external system interactions.

pub mod listener;
pub mod ports;
pub mod relay;
pub mod server;
pub mod tracker;

// Re-export use cases
pub use listener::ListenerLoop;
pub use relay::{read_until_deadline, RelayHandler};
pub use server::{RelayServer, ServerConfig};
pub use tracker::{SessionGuard, SessionTracker};

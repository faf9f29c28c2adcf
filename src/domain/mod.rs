//! Domain layer - Core value objects and errors
//!
//! Contains endpoint and session value objects, configuration,
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod session;

// Re-export common types
pub use config::{AppConfig, ClipboardBackend};
pub use endpoint::{Endpoint, EndpointConfig, NetworkKind};
pub use error::*;
pub use session::{BuildInfo, ReadEnd, ReadOutcome, ShutdownPolicy};

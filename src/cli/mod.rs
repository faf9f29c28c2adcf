//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod opener_app;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, OpenerOptions};
pub use opener_app::{run_opener, start_relay};
pub use presenter::Presenter;
pub use signals::{TerminationSignal, TerminationSignals};
